//! Config validation: naming rules and uniqueness of paths and fields.

use crate::config::ApiConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

const ID_FIELD: &str = "_id";
const PATH_SEGMENT_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

pub fn validate(config: &ApiConfig) -> Result<(), ConfigError> {
    if config.database.trim().is_empty() {
        return Err(ConfigError::Validation("database name is empty".into()));
    }
    if config.resources.is_empty() {
        return Err(ConfigError::Validation("at least one resource required".into()));
    }

    let path_segment_pattern =
        Regex::new(PATH_SEGMENT_PATTERN).map_err(|e| ConfigError::Validation(e.to_string()))?;
    let mut path_segments = HashSet::new();
    for resource in &config.resources {
        if !path_segment_pattern.is_match(&resource.path_segment) {
            return Err(ConfigError::Validation(format!(
                "invalid path segment '{}'",
                resource.path_segment
            )));
        }
        if resource.collection.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "resource '{}' has an empty collection name",
                resource.path_segment
            )));
        }
        if resource.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "resource '{}' has an empty label",
                resource.path_segment
            )));
        }
        if !path_segments.insert(resource.path_segment.as_str()) {
            return Err(ConfigError::DuplicatePathSegment(resource.path_segment.clone()));
        }

        let mut fields = HashSet::new();
        for field in &resource.fields {
            if field == ID_FIELD {
                return Err(ConfigError::IdentifierField(resource.path_segment.clone()));
            }
            if !fields.insert(field.as_str()) {
                return Err(ConfigError::DuplicateField {
                    resource: resource.path_segment.clone(),
                    field: field.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    #[test]
    fn presets_are_valid() {
        validate(&presets::rental()).unwrap();
        validate(&presets::catalog()).unwrap();
    }

    #[test]
    fn rejects_duplicate_path_segment() {
        let mut config = presets::rental();
        let dup = config.resources[0].clone();
        config.resources.push(dup);
        assert!(matches!(validate(&config), Err(ConfigError::DuplicatePathSegment(p)) if p == "cars"));
    }

    #[test]
    fn rejects_writable_identifier() {
        let mut config = presets::catalog();
        config.resources[0].fields.push("_id".into());
        assert!(matches!(validate(&config), Err(ConfigError::IdentifierField(_))));
    }

    #[test]
    fn rejects_duplicate_field() {
        let mut config = presets::rental();
        config.resources[1].fields.push("email".into());
        assert!(matches!(
            validate(&config),
            Err(ConfigError::DuplicateField { field, .. }) if field == "email"
        ));
    }

    #[test]
    fn rejects_path_segment_with_slash() {
        let mut config = presets::rental();
        config.resources[0].path_segment = "cars/old".into();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rejects_empty_resource_list() {
        let mut config = presets::rental();
        config.resources.clear();
        assert!(validate(&config).is_err());
    }
}
