use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintcostError {
    #[error("Efficiency and nominal machine rate cannot be zero: effective throughput is zero")]
    DegenerateThroughput,

    #[error("Order quantity must be at least one unit")]
    ZeroQuantity,

    #[error("Monthly crew hours must be a positive number, got {0}")]
    InvalidCalendar(f64),
}
