//! Structural checks for instances, encodings, and schedules.
//!
//! Every check collects all problems it finds instead of stopping at the
//! first one. Detects:
//! - Ragged jobs, unknown machines, and negative durations
//! - Resource orders that are not per-machine permutations
//! - Schedules that break job precedence or overlap on a machine
//!
//! Cycle detection is not done here: a structurally valid resource order may
//! still be infeasible, which only simulation can tell.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7.1

use crate::encoding::ResourceOrder;
use crate::models::{Instance, Operation, OperationSpec, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Jobs do not all have the same number of operations.
    RaggedJobs,
    /// An operation references a machine that doesn't exist.
    InvalidMachineReference,
    /// An operation has a negative duration.
    NegativeDuration,
    /// The encoding has the wrong number of machine lists.
    MachineCountMismatch,
    /// An operation appears in a machine list it does not belong to.
    MisplacedOperation,
    /// An operation appears more than once.
    DuplicateOperation,
    /// An operation is absent from its machine's list.
    MissingOperation,
    /// A schedule's timings disagree with the instance.
    InvalidTiming,
    /// An operation starts before its job predecessor ends.
    PrecedenceViolation,
    /// Two operations on one machine overlap in time.
    MachineOverlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates raw job data before an [`Instance`] is built.
///
/// Checks:
/// 1. All jobs have the same number of operations
/// 2. Every machine index is `< num_machines`
/// 3. Every duration is non-negative
pub fn validate_jobs(num_machines: usize, jobs: &[Vec<OperationSpec>]) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(first) = jobs.first() {
        let num_tasks = first.len();
        for (job, ops) in jobs.iter().enumerate() {
            if ops.len() != num_tasks {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RaggedJobs,
                    format!(
                        "job {job} has {} operations, expected {num_tasks}",
                        ops.len()
                    ),
                ));
            }
        }
    }

    for (job, ops) in jobs.iter().enumerate() {
        for (task, spec) in ops.iter().enumerate() {
            if spec.machine >= num_machines {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidMachineReference,
                    format!(
                        "operation ({job},{task}) references machine {} but only {num_machines} exist",
                        spec.machine
                    ),
                ));
            }
            if spec.duration < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!(
                        "operation ({job},{task}) has negative duration {}",
                        spec.duration
                    ),
                ));
            }
        }
    }

    into_result(errors)
}

/// Validates that `order` is a permutation of each machine's operations.
///
/// Checks:
/// 1. One list per machine of the instance
/// 2. Every listed operation exists and runs on that list's machine
/// 3. No operation is listed twice
/// 4. No operation is missing
pub fn validate_resource_order(instance: &Instance, order: &ResourceOrder) -> ValidationResult {
    let mut errors = Vec::new();

    if order.num_machines() != instance.num_machines() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MachineCountMismatch,
            format!(
                "resource order has {} machines, instance has {}",
                order.num_machines(),
                instance.num_machines()
            ),
        ));
        return Err(errors);
    }

    let mut seen = vec![false; instance.operation_count()];
    for machine in 0..order.num_machines() {
        for &op in order.machine(machine) {
            if !instance.contains(op) || instance.machine_of(op) != machine {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MisplacedOperation,
                    format!("operation {op} does not run on machine {machine}"),
                ));
                continue;
            }
            let idx = op.index(instance.num_tasks());
            if seen[idx] {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateOperation,
                    format!("operation {op} appears twice on machine {machine}"),
                ));
            }
            seen[idx] = true;
        }
    }

    for op in instance.operations() {
        if !seen[op.index(instance.num_tasks())] {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingOperation,
                format!(
                    "operation {op} missing from machine {}",
                    instance.machine_of(op)
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates that `schedule` is a feasible timing of `instance`.
///
/// Checks:
/// 1. Dimensions match and every start is non-negative
/// 2. `end = start + duration` for every operation
/// 3. Operations of a job do not start before their predecessor ends
/// 4. Operations on one machine do not overlap
pub fn validate_schedule(instance: &Instance, schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();

    if schedule.num_jobs() != instance.num_jobs() || schedule.num_tasks() != instance.num_tasks() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTiming,
            format!(
                "schedule is {}x{}, instance is {}x{}",
                schedule.num_jobs(),
                schedule.num_tasks(),
                instance.num_jobs(),
                instance.num_tasks()
            ),
        ));
        return Err(errors);
    }

    for op in instance.operations() {
        let start = schedule.start(op);
        if start < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTiming,
                format!("operation {op} starts at negative time {start}"),
            ));
        }
        if schedule.end(op) != start + instance.duration_of(op) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTiming,
                format!(
                    "operation {op} ends at {} but should end at {}",
                    schedule.end(op),
                    start + instance.duration_of(op)
                ),
            ));
        }
        if let Some(pred) = op.job_predecessor() {
            if start < schedule.end(pred) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PrecedenceViolation,
                    format!(
                        "operation {op} starts at {start} before {pred} ends at {}",
                        schedule.end(pred)
                    ),
                ));
            }
        }
    }

    for machine in 0..instance.num_machines() {
        let mut ops: Vec<Operation> = instance.operations_on(machine);
        ops.sort_by_key(|&op| (schedule.start(op), schedule.end(op)));
        for pair in ops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if schedule.start(b) < schedule.end(a) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MachineOverlap,
                    format!("operations {a} and {b} overlap on machine {machine}"),
                ));
            }
        }
    }

    into_result(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::two_by_two;

    fn spec(machine: usize, duration: i64) -> OperationSpec {
        OperationSpec::new(machine, duration)
    }

    #[test]
    fn test_valid_jobs() {
        let jobs = vec![vec![spec(0, 1), spec(1, 2)], vec![spec(1, 0), spec(0, 4)]];
        assert!(validate_jobs(2, &jobs).is_ok());
    }

    #[test]
    fn test_ragged_jobs() {
        let jobs = vec![vec![spec(0, 1), spec(1, 2)], vec![spec(1, 3)]];
        let errors = validate_jobs(2, &jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RaggedJobs));
    }

    #[test]
    fn test_collects_all_errors() {
        let jobs = vec![vec![spec(5, 1), spec(0, -2)]];
        let errors = validate_jobs(1, &jobs).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("machine 5"));
        assert_eq!(errors[1].kind, ValidationErrorKind::NegativeDuration);
    }

    #[test]
    fn test_resource_order_valid() {
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![
            vec![Operation::new(0, 0), Operation::new(1, 1)],
            vec![Operation::new(1, 0), Operation::new(0, 1)],
        ]);
        assert!(validate_resource_order(&inst, &order).is_ok());
    }

    #[test]
    fn test_resource_order_misplaced_and_missing() {
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![
            vec![Operation::new(0, 0), Operation::new(0, 1)],
            vec![Operation::new(1, 0)],
        ]);
        let errors = validate_resource_order(&inst, &order).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MisplacedOperation));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingOperation && e.message.contains("(1,1)")));
    }

    #[test]
    fn test_resource_order_duplicate() {
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![
            vec![Operation::new(0, 0), Operation::new(0, 0), Operation::new(1, 1)],
            vec![Operation::new(1, 0), Operation::new(0, 1)],
        ]);
        let errors = validate_resource_order(&inst, &order).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateOperation));
    }

    #[test]
    fn test_resource_order_machine_count() {
        let inst = two_by_two();
        let order = ResourceOrder::from_machine_orders(vec![vec![]]);
        let errors = validate_resource_order(&inst, &order).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MachineCountMismatch);
    }

    #[test]
    fn test_schedule_overlap_and_precedence() {
        let inst = two_by_two();
        // (0,0) [0,3) m0, (0,1) [2,4) m1, (1,0) [0,2) m1, (1,1) [1,5) m0
        let schedule = Schedule::from_timings(
            2,
            2,
            vec![0, 2, 0, 1],
            vec![3, 4, 2, 5],
            vec![None; 4],
        );
        let errors = validate_schedule(&inst, &schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PrecedenceViolation));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MachineOverlap));
    }

    #[test]
    fn test_schedule_wrong_duration() {
        let inst = two_by_two();
        let schedule = Schedule::from_timings(
            2,
            2,
            vec![0, 3, 0, 3],
            vec![3, 5, 2, 6],
            vec![None; 4],
        );
        let errors = validate_schedule(&inst, &schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTiming && e.message.contains("(1,1)")));
    }
}
