//! Typed records for the built-in resources. Each record declares its collection
//! and the fields a create may write; the presets in `config::presets` are built
//! from these declarations.

use crate::config::{Operation, ResourceConfig};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const PATH_SEGMENT: &'static str;
    const COLLECTION: &'static str;
    const LABEL: &'static str;
    /// Wire names of the fields written on create.
    const FIELDS: &'static [&'static str];
    const OPERATIONS: &'static [Operation] = &Operation::ALL;

    fn resource() -> ResourceConfig {
        ResourceConfig {
            path_segment: Self::PATH_SEGMENT.to_string(),
            collection: Self::COLLECTION.to_string(),
            label: Self::LABEL.to_string(),
            fields: Self::FIELDS.iter().map(|f| f.to_string()).collect(),
            operations: Self::OPERATIONS.to_vec(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub automatic: Option<bool>,
}

impl Record for Car {
    const PATH_SEGMENT: &'static str = "cars";
    const COLLECTION: &'static str = "cars";
    const LABEL: &'static str = "Car";
    const FIELDS: &'static [&'static str] = &["make", "model", "year", "automatic"];
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "postalZip")]
    pub postal_zip: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl Record for User {
    const PATH_SEGMENT: &'static str = "users";
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";
    const FIELDS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "phone",
        "email",
        "postalZip",
        "region",
        "country",
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
}

impl Record for Plant {
    const PATH_SEGMENT: &'static str = "plants";
    const COLLECTION: &'static str = "plants";
    const LABEL: &'static str = "Plant";
    const FIELDS: &'static [&'static str] = &["common_name", "scientific_name"];
}

/// Plant family. Exposed read/update only: families are seeded outside the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub name: Option<String>,
}

impl Record for Family {
    const PATH_SEGMENT: &'static str = "families";
    const COLLECTION: &'static str = "families";
    const LABEL: &'static str = "Family";
    const FIELDS: &'static [&'static str] = &["name"];
    const OPERATIONS: &'static [Operation] = &[Operation::List, Operation::Read, Operation::Update];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_resource_uses_wire_field_names() {
        let resource = User::resource();
        assert!(resource.fields.iter().any(|f| f == "postalZip"));
        let json = serde_json::to_value(User {
            postal_zip: Some("1010".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["postalZip"], "1010");
    }

    #[test]
    fn family_has_no_create_or_delete() {
        let ops = Family::resource().operations;
        assert!(!ops.contains(&Operation::Create));
        assert!(!ops.contains(&Operation::Delete));
        assert_eq!(Car::resource().operations.len(), 5);
    }
}
