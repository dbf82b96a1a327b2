use serde::{Deserialize, Serialize};

/// Labor quote for one order, rounded for display.
///
/// Currency and hours carry two decimals; throughput is a whole number of units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub hourly_crew_cost: f64,
    pub real_units_per_hour: f64,
    pub total_job_hours: f64,
    pub total_labor_cost: f64,
    pub labor_cost_per_unit: f64,
}
