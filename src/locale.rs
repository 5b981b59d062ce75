//! Localized display strings
//!
//! Every user-facing text goes through a [`Localizer`]. The shipped
//! [`Catalog`] is built from the JSON tables under `locales/`, with English as
//! the base layer so a partial table never leaves a hole.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const EN: &str = include_str!("../locales/en.json");
const FR: &str = include_str!("../locales/fr.json");

/// Resolves a display string for a key
pub trait Localizer: Send + Sync {
    /// Unknown keys come back unchanged
    fn lookup(&self, key: &str) -> String;
}

/// Key/value translation table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in English table
    pub fn english() -> Self {
        let entries = serde_json::from_str(EN).unwrap_or_default();
        Self {
            locale: "en".to_string(),
            entries,
        }
    }

    /// Built-in table for `locale`, falling back to English
    pub fn builtin(locale: &str) -> Self {
        let mut catalog = Self::english();
        match locale {
            "en" => {}
            "fr" => {
                if let Ok(entries) = serde_json::from_str::<HashMap<String, String>>(FR) {
                    catalog.entries.extend(entries);
                    catalog.locale = "fr".to_string();
                }
            }
            other => {
                tracing::warn!("No built-in table for locale {other:?}, using English");
            }
        }
        catalog
    }

    /// Layer a JSON object of `key: text` pairs over the current entries
    pub fn overlay_json(&mut self, json: &str) -> Result<()> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).context("translation table is not a flat JSON object")?;
        self.entries.extend(entries);
        Ok(())
    }

    /// Layer a user-supplied JSON file over the current entries
    pub fn overlay_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        self.overlay_json(&content)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
