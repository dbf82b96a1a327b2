use crate::order::{OrderRequest, ShiftCalendar};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OrderFile {
    pub schema_version: String,
    pub order: OrderRequest,
    #[serde(default)]
    pub calendar: Option<ShiftCalendar>,
}
