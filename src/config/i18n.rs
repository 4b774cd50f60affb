//! Phrase translation lookup.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Maps English phrases to translations; unknown phrases pass through.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    table: HashMap<String, String>,
}

impl Translator {
    pub fn from_table(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Load a TOML file of `"english" = "translated"` pairs
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations: {}", path.display()))?;
        let table: HashMap<String, String> = toml::from_str(&content)
            .with_context(|| format!("Failed to parse translations: {}", path.display()))?;
        tracing::debug!("Loaded {} translations from {}", table.len(), path.display());
        Ok(Self { table })
    }

    pub fn lookup(&self, text: &str) -> String {
        self.table
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
