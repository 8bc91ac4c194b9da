//! In-memory implementation of the reader traits.
//!
//! Stands in for the remote data source in tests and local tooling while
//! honoring the same contract: filtering, counting, and page slicing happen
//! here, driven entirely by the [`ClientListQuery`] it receives.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::domain::client::Client;
use crate::domain::manager::Manager;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientFilter, ClientListQuery, ClientReader, ManagerReader};

#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    clients: Vec<Client>,
    managers: Vec<Manager>,
}

/// Seed payload accepted by [`InMemoryRepository::from_json`].
#[derive(Deserialize)]
struct Fixture {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    managers: Vec<Manager>,
}

impl InMemoryRepository {
    pub fn new(clients: Vec<Client>, managers: Vec<Manager>) -> Self {
        Self { clients, managers }
    }

    /// Builds a repository from a JSON fixture with `clients` and `managers`
    /// arrays.
    pub fn from_json(data: &str) -> RepositoryResult<Self> {
        let fixture: Fixture = serde_json::from_str(data)?;
        Ok(Self::new(fixture.clients, fixture.managers))
    }

    fn matches(filter: &ClientFilter, client: &Client) -> bool {
        if let Some(name) = &filter.name {
            let needle = name.to_lowercase();
            if !client.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(manager) = filter.manager
            && client.manager_id != Some(manager)
        {
            return false;
        }

        // Records without a revenue value never match a floor.
        if let Some(floor) = filter.min_revenue
            && !client.annual_revenue.is_some_and(|revenue| revenue >= floor)
        {
            return false;
        }

        if let Some(industry) = &filter.industry
            && client.industry.as_deref() != Some(industry.as_str())
        {
            return false;
        }

        true
    }
}

impl ClientReader for InMemoryRepository {
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut matched: Vec<&Client> = self
            .clients
            .iter()
            .filter(|client| Self::matches(&query.filter, client))
            .collect();

        // Deterministic order keeps page slices stable across repeated calls
        // with the same query.
        matched.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.get().cmp(&b.id.get()))
        });

        let total = matched.len();

        let items = match &query.pagination {
            Some(pagination) => {
                let page = pagination.page.max(1);
                matched
                    .into_iter()
                    .skip((page - 1) * pagination.per_page)
                    .take(pagination.per_page)
                    .cloned()
                    .collect()
            }
            None => matched.into_iter().cloned().collect(),
        };

        Ok((total, items))
    }

    fn list_industries(&self) -> RepositoryResult<Vec<String>> {
        let industries: BTreeSet<&str> = self
            .clients
            .iter()
            .filter_map(|client| client.industry.as_deref())
            .collect();

        Ok(industries.into_iter().map(str::to_string).collect())
    }
}

impl ManagerReader for InMemoryRepository {
    fn list_managers(&self) -> RepositoryResult<Vec<Manager>> {
        let mut managers = self.managers.clone();
        managers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.get().cmp(&b.id.get())));
        Ok(managers)
    }
}
