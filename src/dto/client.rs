//! DTOs shaped for the console table and filter pickers.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::manager::Manager;
use crate::dto::time::relative_since;
use crate::pagination::PaginationState;

/// One entry of a picklist, in the `{label, value}` shape the pickers
/// consume. The empty value is reserved for "no constraint".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The "All" entry shown first in the industry picker.
    pub fn all_categories() -> Self {
        Self::new("All", "")
    }
}

impl From<&Manager> for SelectOption {
    fn from(manager: &Manager) -> Self {
        Self::new(manager.name.clone(), manager.id.to_string())
    }
}

/// Option lists backing the filter pickers, fetched once at startup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub industries: Vec<SelectOption>,
    pub managers: Vec<SelectOption>,
}

/// One display row of the console table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientRow {
    /// Position within the whole filtered result set, starting at 1 on the
    /// first row of the first page and continuing across pages.
    pub sequence_number: usize,
    pub name: String,
    pub link: String,
    pub manager_name: Option<String>,
    pub manager_link: Option<String>,
    pub phone: Option<String>,
    pub annual_revenue: Option<f64>,
    pub industry: Option<String>,
    pub updated_ago: String,
}

impl ClientRow {
    pub fn from_client(client: &Client, sequence_number: usize, now: NaiveDateTime) -> Self {
        Self {
            sequence_number,
            name: client.name.clone(),
            link: format!("/clients/{}", client.id),
            manager_name: client.manager_name.clone(),
            manager_link: client.manager_id.map(|id| format!("/managers/{id}")),
            phone: client.phone.clone(),
            annual_revenue: client.annual_revenue,
            industry: client.industry.clone(),
            updated_ago: relative_since(client.updated_at, now),
        }
    }
}

/// Everything the presentation boundary needs to render the table and its
/// pagination controls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConsolePageData {
    pub rows: Vec<ClientRow>,
    pub pagination: PaginationState,
}
