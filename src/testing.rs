//! Shared instances for unit tests.

use crate::models::Instance;

/// job 0 = [(m0, 3), (m1, 2)], job 1 = [(m1, 2), (m0, 4)].
pub(crate) fn two_by_two() -> Instance {
    Instance::new(2, vec![vec![(0, 3), (1, 2)], vec![(1, 2), (0, 4)]]).unwrap()
}

/// Fisher & Thompson 6x6 (optimum 55).
pub(crate) fn ft06() -> Instance {
    Instance::new(
        6,
        vec![
            vec![(2, 1), (0, 3), (1, 6), (3, 7), (5, 3), (4, 6)],
            vec![(1, 8), (2, 5), (4, 10), (5, 10), (0, 10), (3, 4)],
            vec![(2, 5), (3, 4), (5, 8), (0, 9), (1, 1), (4, 7)],
            vec![(1, 5), (0, 5), (2, 5), (3, 3), (4, 8), (5, 9)],
            vec![(2, 9), (1, 3), (4, 5), (5, 4), (0, 3), (3, 1)],
            vec![(1, 3), (3, 3), (5, 9), (0, 10), (4, 4), (2, 1)],
        ],
    )
    .unwrap()
}

/// Three jobs on three machines with crossing routes.
pub(crate) fn three_by_three() -> Instance {
    Instance::new(
        3,
        vec![
            vec![(0, 3), (1, 2), (2, 2)],
            vec![(0, 2), (2, 1), (1, 4)],
            vec![(1, 4), (2, 3), (0, 1)],
        ],
    )
    .unwrap()
}
