//! Built-in domain presets.

use crate::config::ApiConfig;
use crate::error::ConfigError;
use crate::model::{Car, Family, Plant, Record, User};

pub const RENTAL: &str = "rental";
pub const CATALOG: &str = "catalog";

/// Cars and users in `CarRentalDB`.
pub fn rental() -> ApiConfig {
    ApiConfig {
        name: "Car Rental".into(),
        database: "CarRentalDB".into(),
        welcome: "Welcome to the Car Rental Database API".into(),
        resources: vec![Car::resource(), User::resource()],
    }
}

/// Plants and plant families in `PlantCatalogDB`.
pub fn catalog() -> ApiConfig {
    ApiConfig {
        name: "Plant Catalog".into(),
        database: "PlantCatalogDB".into(),
        welcome: "Welcome to the Plant Catalog Database API".into(),
        resources: vec![Plant::resource(), Family::resource()],
    }
}

pub fn preset(name: &str) -> Result<ApiConfig, ConfigError> {
    match name.trim().to_ascii_lowercase().as_str() {
        RENTAL => Ok(rental()),
        CATALOG => Ok(catalog()),
        other => Err(ConfigError::UnknownPreset(other.to_string())),
    }
}
