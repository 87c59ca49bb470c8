//! Resolved model: config validated and flattened for runtime use.

use crate::config::Operation;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
pub struct ResolvedResource {
    pub path_segment: String,
    pub collection: String,
    pub label: String,
    pub fields: Vec<String>,
    pub operations: HashSet<Operation>,
}

impl ResolvedResource {
    pub fn allows(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedModel {
    pub name: String,
    pub database: String,
    pub welcome: String,
    pub resources: Vec<ResolvedResource>,
    pub resource_by_path: HashMap<String, ResolvedResource>,
}

impl ResolvedModel {
    pub fn resource_by_path(&self, path: &str) -> Option<&ResolvedResource> {
        self.resource_by_path.get(path)
    }
}
