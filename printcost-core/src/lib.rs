pub mod error;
pub mod estimator;

pub use error::PrintcostError;
pub use estimator::{breakdown, estimate, LaborBreakdown};
