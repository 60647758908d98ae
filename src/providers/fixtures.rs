//! Embedded fixture files

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::providers::ProviderError;
use crate::yaml::{parse_yaml, parse_yaml_file};

#[derive(Embed)]
#[folder = "fixtures/"]
struct EmbeddedFixtures;

/// Parse an embedded fixture by file name
pub fn load_embedded<T: DeserializeOwned>(name: &str) -> Result<T, ProviderError> {
    let file =
        EmbeddedFixtures::get(name).ok_or_else(|| ProviderError::MissingFixture(name.to_string()))?;
    let content = String::from_utf8_lossy(&file.data);
    Ok(parse_yaml(&content, &format!("fixtures/{}", name))?)
}

/// Parse `path` if given, else the embedded fixture `name`
pub fn load_fixture<T: DeserializeOwned>(path: Option<&Path>, name: &str) -> Result<T, ProviderError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading fixture override");
            Ok(parse_yaml_file(path)?)
        }
        None => load_embedded(name),
    }
}

/// Names of all embedded fixtures
pub fn embedded_names() -> Vec<String> {
    let mut names: Vec<String> = EmbeddedFixtures::iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}
