//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::manager::Manager;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ManagerReader};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
        fn list_industries(&self) -> RepositoryResult<Vec<String>>;
    }

    impl ManagerReader for Repository {
        fn list_managers(&self) -> RepositoryResult<Vec<Manager>>;
    }
}
