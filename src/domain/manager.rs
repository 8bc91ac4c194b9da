use serde::{Deserialize, Serialize};

use crate::domain::types::ManagerId;

/// A record owner offered by the owner picker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    pub id: ManagerId,
    pub name: String,
}
