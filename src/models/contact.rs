use serde::{Deserialize, Serialize};

/// User-entered contact kept in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalContact {
    pub name: String,
    pub relation: String,
    pub number: String,
}
