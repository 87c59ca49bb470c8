//! Raw config types matching the JSON resource file.

use serde::{Deserialize, Serialize};

/// Gateway operations a resource may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Read,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

fn all_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Plural URL segment under `/api`, e.g. `cars`.
    pub path_segment: String,
    pub collection: String,
    /// Singular display name used in status messages, e.g. `Car`.
    pub label: String,
    /// Fields copied from the request body on create; everything else is dropped.
    pub fields: Vec<String>,
    #[serde(default = "all_operations")]
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    pub name: String,
    pub database: String,
    pub welcome: String,
    pub resources: Vec<ResourceConfig>,
}
