//! Schedule quality metrics (KPIs).
//!
//! Computes standard indicators of a job-shop schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Lower Bound | max(longest job, busiest machine) |
//! | Gap | (C_max - LB) / LB, in percent |
//! | Utilization | Machine load / C_max |
//! | Idle Time | Sum over machines of C_max - load |
//! | Avg Flow Time | Mean job completion time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Trivial lower bound on the optimal makespan.
    pub lower_bound: i64,
    /// Relative distance to the lower bound, in percent.
    pub gap_percent: f64,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-machine utilization, indexed by machine.
    pub utilization_by_machine: Vec<f64>,
    /// Total idle time over all machines before the makespan.
    pub total_idle: i64,
    /// Mean completion time over jobs.
    pub avg_flow_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs of `schedule`, a schedule of `instance`.
    pub fn calculate(instance: &Instance, schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let lower_bound = instance.lower_bound();

        let gap_percent = if lower_bound > 0 {
            (makespan - lower_bound) as f64 / lower_bound as f64 * 100.0
        } else {
            0.0
        };

        let loads: Vec<i64> = (0..instance.num_machines())
            .map(|m| instance.machine_load(m))
            .collect();
        let utilization_by_machine: Vec<f64> = loads
            .iter()
            .map(|&load| {
                if makespan > 0 {
                    load as f64 / makespan as f64
                } else {
                    0.0
                }
            })
            .collect();
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };
        let total_idle = loads.iter().map(|&load| makespan - load).sum();

        let completions: Vec<i64> = (0..instance.num_jobs())
            .filter_map(|j| schedule.job_completion(j))
            .collect();
        let avg_flow_time = if completions.is_empty() {
            0.0
        } else {
            completions.iter().sum::<i64>() as f64 / completions.len() as f64
        };

        Self {
            makespan,
            lower_bound,
            gap_percent,
            avg_utilization,
            utilization_by_machine,
            total_idle,
            avg_flow_time,
        }
    }

    /// Whether the makespan equals the lower bound, which proves optimality.
    pub fn is_provably_optimal(&self) -> bool {
        self.makespan == self.lower_bound
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_gap_percent: f64, min_utilization: f64) -> bool {
        self.gap_percent <= max_gap_percent && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::{dispatch, PriorityRule};
    use crate::encoding::JobNumbers;
    use crate::simulation::simulate;
    use crate::testing::{ft06, two_by_two};

    #[test]
    fn test_kpi_two_by_two() {
        let inst = two_by_two();
        let schedule = simulate(&inst, &dispatch(&inst, PriorityRule::Spt)).unwrap();
        let kpi = ScheduleKpi::calculate(&inst, &schedule);

        assert_eq!(kpi.makespan, 7);
        assert_eq!(kpi.lower_bound, 7);
        assert!(kpi.gap_percent.abs() < 1e-10);
        assert!(kpi.is_provably_optimal());
        assert!((kpi.utilization_by_machine[0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_machine[1] - 4.0 / 7.0).abs() < 1e-10);
        assert_eq!(kpi.total_idle, 3);
        // jobs complete at 5 and 7
        assert!((kpi.avg_flow_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_gap() {
        let inst = ft06();
        let order = JobNumbers::round_robin(&inst)
            .to_resource_order(&inst)
            .unwrap();
        let schedule = simulate(&inst, &order).unwrap();
        let kpi = ScheduleKpi::calculate(&inst, &schedule);

        assert!(kpi.makespan >= kpi.lower_bound);
        assert!(kpi.gap_percent >= 0.0);
        assert!(kpi.avg_utilization > 0.0 && kpi.avg_utilization <= 1.0);
        assert!(kpi.meets_thresholds(f64::INFINITY, 0.0));
        assert!(!kpi.meets_thresholds(-1.0, 0.0));
    }

    #[test]
    fn test_kpi_empty() {
        let inst = Instance::new(2, Vec::<Vec<(usize, i64)>>::new()).unwrap();
        let schedule = simulate(&inst, &crate::encoding::ResourceOrder::empty(&inst)).unwrap();
        let kpi = ScheduleKpi::calculate(&inst, &schedule);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert_eq!(kpi.avg_flow_time, 0.0);
    }
}
