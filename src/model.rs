use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named category of user request with its trigger phrases and replies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new(tag: impl Into<String>, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Ordered collection of intents. Order only matters for breaking score ties.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub intents: Vec<Intent>,
}

impl Catalog {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read intent catalog at {:?}", path_ref))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse intent catalog at {:?}", path_ref))?;
        Ok(catalog)
    }

    /// Rejects intents the matcher cannot answer from: empty tags, no
    /// patterns, or no responses.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, intent) in self.intents.iter().enumerate() {
            if intent.tag.trim().is_empty() {
                bail!("Intent #{} has an empty tag", i + 1);
            }
            if intent.patterns.is_empty() {
                bail!("Intent '{}' has no patterns", intent.tag);
            }
            if intent.responses.is_empty() {
                bail!("Intent '{}' has no responses", intent.tag);
            }
            if !seen.insert(intent.tag.as_str()) {
                // Same tag means a shared rotation window.
                log::warn!("Duplicate intent tag '{}' in catalog", intent.tag);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_document() {
        let json = r#"{
            "intents": [
                {
                    "tag": "greeting",
                    "patterns": ["hi", "hello"],
                    "responses": ["Hello!", "Hi there!"]
                }
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.intents[0],
            Intent::new("greeting", &["hi", "hello"], &["Hello!", "Hi there!"])
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_responses() {
        let catalog = Catalog::new(vec![Intent::new("fees", &["fee structure"], &[])]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("fees"));
    }

    #[test]
    fn test_validate_rejects_missing_patterns_and_blank_tag() {
        let no_patterns = Catalog::new(vec![Intent::new("fees", &[], &["₹1 lakh"])]);
        assert!(no_patterns.validate().is_err());

        let blank_tag = Catalog::new(vec![Intent::new("  ", &["hi"], &["Hello!"])]);
        assert!(blank_tag.validate().is_err());
    }

    #[test]
    fn test_validate_allows_duplicate_tags() {
        let catalog = Catalog::new(vec![
            Intent::new("greeting", &["hi"], &["Hello!"]),
            Intent::new("greeting", &["hey"], &["Hey!"]),
        ]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Catalog::load_from_file("does/not/exist.json").unwrap_err();
        assert!(format!("{:?}", err).contains("does/not/exist.json"));
    }
}
