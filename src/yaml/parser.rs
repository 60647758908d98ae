//! Typed YAML parsing

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML content into a typed value, keeping the source for diagnostics
pub fn parse_yaml<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content).map_err(|e| {
        YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename))
    })
}

/// Parse a YAML file
pub fn parse_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let content = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    parse_yaml(&content, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::entities::{Recipe, RecipeCategory};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config_document() {
        let config: Config = parse_yaml("location: Oakland\nlog: debug\n", "config.yaml").unwrap();
        assert_eq!(config.location(), Some("Oakland"));
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_recipe_catalog() {
        let yaml = "- id: t1\n  title: Toast\n  prepTime: 3\n  rating: 4.0\n  category: quick\n";
        let recipes: Vec<Recipe> = parse_yaml(yaml, "recipes.yaml").unwrap();
        assert_eq!(recipes[0].category, RecipeCategory::Quick);
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_bad_field_points_at_file() {
        let yaml = "- id: t1\n  title: Toast\n  prepTime: soon\n  rating: 4.0\n  category: quick\n";
        let err = parse_yaml::<Vec<Recipe>>(yaml, "my-recipes.yaml").unwrap_err();

        let YamlError::Syntax(diag) = err else {
            panic!("expected a syntax error");
        };
        assert_eq!(diag.filename, "my-recipes.yaml");
        if let Some(span) = diag.span {
            assert!(span.offset() <= yaml.len());
        }
    }

    #[test]
    fn test_parse_file_and_missing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "catalog: mine.yaml\n").unwrap();

        let config: Config = parse_yaml_file(&path).unwrap();
        assert_eq!(config.catalog.as_deref(), Some(Path::new("mine.yaml")));

        let missing: Result<Config, _> = parse_yaml_file(&tmp.path().join("nope.yaml"));
        assert!(matches!(missing, Err(YamlError::Io(_))));
    }
}
