//! Load config from a JSON file or a preset and resolve it for the router.

use crate::config::resolved::{ResolvedModel, ResolvedResource};
use crate::config::{presets, validate, ApiConfig};
use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Build resolved model from config (validates first).
pub fn resolve(config: &ApiConfig) -> Result<ResolvedModel, ConfigError> {
    validate(config)?;

    let mut resources = Vec::with_capacity(config.resources.len());
    let mut resource_by_path = HashMap::new();
    for r in &config.resources {
        let resource = ResolvedResource {
            path_segment: r.path_segment.clone(),
            collection: r.collection.clone(),
            label: r.label.clone(),
            fields: r.fields.clone(),
            operations: r.operations.iter().copied().collect(),
        };
        resource_by_path.insert(r.path_segment.clone(), resource.clone());
        resources.push(resource);
    }

    Ok(ResolvedModel {
        name: config.name.clone(),
        database: config.database.clone(),
        welcome: config.welcome.clone(),
        resources,
        resource_by_path,
    })
}

pub fn load_from_str(json: &str) -> Result<ApiConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Load(e.to_string()))
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<ApiConfig, ConfigError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    load_from_str(&raw)
}

/// Config file when `config_path` is set, otherwise the named preset.
pub async fn load_config(config_path: Option<&Path>, preset: &str) -> Result<ApiConfig, ConfigError> {
    match config_path {
        Some(path) => load_from_path(path).await,
        None => presets::preset(preset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Operation;
    use std::io::Write;

    const INVENTORY: &str = r#"{
        "name": "Inventory",
        "database": "InventoryDB",
        "welcome": "Welcome to the Inventory API",
        "resources": [
            { "path_segment": "parts", "collection": "parts", "label": "Part", "fields": ["sku", "qty"] },
            { "path_segment": "bins", "collection": "storage_bins", "label": "Bin", "fields": ["code"],
              "operations": ["list", "read"] }
        ]
    }"#;

    #[test]
    fn resolves_preset_by_path() {
        let model = resolve(&presets::catalog()).unwrap();
        let families = model.resource_by_path("families").unwrap();
        assert!(families.allows(Operation::Update));
        assert!(!families.allows(Operation::Create));
        assert!(model.resource_by_path("cars").is_none());
        assert_eq!(model.database, "PlantCatalogDB");
    }

    #[test]
    fn operations_default_to_all() {
        let model = resolve(&load_from_str(INVENTORY).unwrap()).unwrap();
        let parts = model.resource_by_path("parts").unwrap();
        assert!(Operation::ALL.iter().all(|op| parts.allows(*op)));
        let bins = model.resource_by_path("bins").unwrap();
        assert_eq!(bins.collection, "storage_bins");
        assert!(!bins.allows(Operation::Delete));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        assert!(matches!(load_from_str("{\"name\":"), Err(ConfigError::Load(_))));
    }

    #[tokio::test]
    async fn file_overrides_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INVENTORY.as_bytes()).unwrap();
        let config = load_config(Some(file.path()), "rental").await.unwrap();
        assert_eq!(config.name, "Inventory");

        let config = load_config(None, "catalog").await.unwrap();
        assert_eq!(config.database, "PlantCatalogDB");
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let err = load_config(Some(Path::new("/nonexistent/gateway.json")), "rental")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
