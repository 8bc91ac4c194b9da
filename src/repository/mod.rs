//! Data-source boundary: canonical query values and reader traits.
//!
//! The console never filters or counts records itself; it builds a
//! [`ClientListQuery`] and hands it to a [`ClientReader`]. Queries are
//! replaced wholesale on every committed change, never mutated in place.

use crate::domain::client::Client;
use crate::domain::manager::Manager;
use crate::domain::types::ManagerId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// One bounded slice of the filtered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Canonical filter snapshot. `None` means "no constraint" for that field;
/// the default value selects every record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientFilter {
    /// Case-insensitive substring on the client name. Only ever set with a
    /// trimmed length of at least [`crate::config::MIN_NAME_SEARCH_LEN`].
    pub name: Option<String>,
    /// Exact match on the assigned record owner.
    pub manager: Option<ManagerId>,
    /// Matches records whose annual revenue is at least this value.
    /// Only ever set to a positive number.
    pub min_revenue: Option<f64>,
    /// Exact match on the industry category.
    pub industry: Option<String>,
}

impl ClientFilter {
    /// Returns true when no field constrains the result set.
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none()
            && self.manager.is_none()
            && self.min_revenue.is_none()
            && self.industry.is_none()
    }
}

/// Query value sent to the data source for one fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientListQuery {
    pub filter: ClientFilter,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: ClientFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read access to the client record set.
pub trait ClientReader {
    /// Returns `(total matching count, requested page slice)`. A page beyond
    /// the end of the result set yields an empty slice with the correct
    /// total; without pagination the full filtered set is returned.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;

    /// Distinct industry values present in the record set, without any
    /// "all categories" sentinel.
    fn list_industries(&self) -> RepositoryResult<Vec<String>>;
}

/// Read access to the record owners offered by the owner picker.
pub trait ManagerReader {
    fn list_managers(&self) -> RepositoryResult<Vec<Manager>>;
}
