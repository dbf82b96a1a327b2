use crate::labor::CrewRoster;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETUP_MINUTES: f64 = 15.0;

/// 22 workdays of one 8 hour shift.
pub const DEFAULT_MONTHLY_HOURS: f64 = 176.0;

fn default_setup_minutes() -> f64 {
    DEFAULT_SETUP_MINUTES
}

fn default_monthly_hours() -> f64 {
    DEFAULT_MONTHLY_HOURS
}

/// A production order to be quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Units ordered.
    pub quantity: u64,
    /// Rated machine throughput in units per hour.
    pub nominal_rate_per_hour: f64,
    /// Fraction of the nominal rate achieved on the floor, in (0.0, 1.0].
    pub efficiency: f64,
    pub crew: CrewRoster,
    /// Employer overhead on wages; 0.80 means 80%.
    pub burden_rate: f64,
    #[serde(default = "default_setup_minutes")]
    pub setup_minutes: f64,
}

/// Paid crew hours in a month, used to turn monthly payroll into an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftCalendar {
    #[serde(default = "default_monthly_hours")]
    pub monthly_hours: f64,
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        Self {
            monthly_hours: DEFAULT_MONTHLY_HOURS,
        }
    }
}

impl ShiftCalendar {
    pub fn new(monthly_hours: f64) -> Self {
        Self { monthly_hours }
    }
}
