use crate::error::PrintcostError;
use printcost_schemas::{
    order::{OrderRequest, ShiftCalendar},
    report::CostReport,
};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Unrounded intermediate values of a labor quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaborBreakdown {
    pub total_wages: f64,
    pub monthly_crew_cost: f64,
    pub hourly_crew_cost: f64,
    pub minute_crew_cost: f64,
    pub real_rate_per_hour: f64,
    pub real_rate_per_minute: f64,
    pub printing_minutes: f64,
    pub total_job_minutes: f64,
    pub total_job_hours: f64,
    pub total_labor_cost: f64,
    pub labor_cost_per_unit: f64,
}

impl LaborBreakdown {
    pub fn to_report(&self) -> CostReport {
        CostReport {
            hourly_crew_cost: round_to(self.hourly_crew_cost, 2),
            real_units_per_hour: round_to(self.real_rate_per_hour, 0),
            total_job_hours: round_to(self.total_job_hours, 2),
            total_labor_cost: round_to(self.total_labor_cost, 2),
            labor_cost_per_unit: round_to(self.labor_cost_per_unit, 2),
        }
    }
}

/// Runs the costing formula without rounding.
///
/// Crew payroll plus burden is spread over the calendar's monthly hours to get a
/// per-minute crew cost. The job takes the printing time at the real rate
/// (nominal rate times efficiency) plus the setup time, and is charged at that
/// per-minute cost.
pub fn breakdown(
    order: &OrderRequest,
    calendar: &ShiftCalendar,
) -> Result<LaborBreakdown, PrintcostError> {
    if order.quantity == 0 {
        return Err(PrintcostError::ZeroQuantity);
    }
    if calendar.monthly_hours.is_nan() || calendar.monthly_hours <= 0.0 {
        return Err(PrintcostError::InvalidCalendar(calendar.monthly_hours));
    }

    let total_wages = order.crew.total_wages();
    let monthly_crew_cost = total_wages * (1.0 + order.burden_rate);
    let hourly_crew_cost = monthly_crew_cost / calendar.monthly_hours;
    let minute_crew_cost = hourly_crew_cost / MINUTES_PER_HOUR;

    let real_rate_per_hour = order.nominal_rate_per_hour * order.efficiency;
    let real_rate_per_minute = real_rate_per_hour / MINUTES_PER_HOUR;
    if real_rate_per_minute == 0.0 {
        return Err(PrintcostError::DegenerateThroughput);
    }

    let quantity = order.quantity as f64;
    let printing_minutes = quantity / real_rate_per_minute;
    let total_job_minutes = printing_minutes + order.setup_minutes;
    let total_job_hours = total_job_minutes / MINUTES_PER_HOUR;

    let total_labor_cost = total_job_minutes * minute_crew_cost;
    let labor_cost_per_unit = total_labor_cost / quantity;

    Ok(LaborBreakdown {
        total_wages,
        monthly_crew_cost,
        hourly_crew_cost,
        minute_crew_cost,
        real_rate_per_hour,
        real_rate_per_minute,
        printing_minutes,
        total_job_minutes,
        total_job_hours,
        total_labor_cost,
        labor_cost_per_unit,
    })
}

/// Quotes labor time and cost for an order, rounded for display.
pub fn estimate(
    order: &OrderRequest,
    calendar: &ShiftCalendar,
) -> Result<CostReport, PrintcostError> {
    breakdown(order, calendar).map(|b| b.to_report())
}

/// Rounds half to even at the given number of decimals.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
