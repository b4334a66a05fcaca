use serde::Deserialize;
use std::path::Path;

use crate::error::{ChatError, ChatResult};

/// One tag and the replies that may be given for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntentEntry {
    pub tag: String,
    /// Example utterances for the tag. Only the keyword classifier reads these.
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

impl IntentEntry {
    pub fn new(tag: impl Into<String>, responses: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            patterns: Vec::new(),
            responses,
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { intents: Vec<IntentEntry> },
    Bare(Vec<IntentEntry>),
}

/// Read-only, ordered collection of intents.
///
/// Tags may repeat; every lookup resolves to the first entry in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentCatalog {
    entries: Vec<IntentEntry>,
}

impl IntentCatalog {
    pub fn new(entries: Vec<IntentEntry>) -> Self {
        for entry in entries.iter().filter(|entry| entry.responses.is_empty()) {
            tracing::warn!("intent `{}` has no responses; selecting it will fail", entry.tag);
        }
        Self { entries }
    }

    /// Parse either `{"intents": [...]}` or a bare array of entries.
    pub fn from_json_str(text: &str) -> ChatResult<Self> {
        let document: CatalogDocument = serde_json::from_str(text)
            .map_err(|error| ChatError::Catalog(format!("failed to parse catalog: {error}")))?;
        let entries = match document {
            CatalogDocument::Wrapped { intents } => intents,
            CatalogDocument::Bare(entries) => entries,
        };
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> ChatResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|error| {
            ChatError::Catalog(format!("failed to read catalog {}: {error}", path.display()))
        })?;
        let catalog = Self::from_json_str(&data).map_err(|error| match error {
            ChatError::Catalog(msg) => ChatError::Catalog(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::info!(
            "loaded {} intents from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// First entry whose tag equals `tag` exactly.
    pub fn find(&self, tag: &str) -> Option<&IntentEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn entries(&self) -> &[IntentEntry] {
        &self.entries
    }

    /// Tags in stored order, duplicates included.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
