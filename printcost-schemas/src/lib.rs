pub mod file_formats;
pub mod labor;
pub mod order;
pub mod report;
