use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ManagerId};

/// One business record as delivered by the data source.
///
/// `manager_name` is denormalized alongside `manager_id` so a row can be
/// rendered without a second owner lookup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: Option<String>,
    pub annual_revenue: Option<f64>,
    pub industry: Option<String>,
    pub manager_id: Option<ManagerId>,
    pub manager_name: Option<String>,
    pub updated_at: NaiveDateTime,
}
