//! The static parts catalog that recognized identifiers are resolved against.
use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A known part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(alias = "displayName", alias = "name")]
    pub display_name: String,
    pub code: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            code: code.into(),
        }
    }
}

const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    ("1", "Мотор", "001234"),
    ("2", "Щетка", "002345"),
    ("3", "Фильтр", "003456"),
    ("4", "Шланг", "004567"),
    ("5", "Корпус", "005678"),
    ("6", "Насадка для ковров", "006789"),
    ("7", "Ручка", "007890"),
    ("8", "Колесо", "008901"),
    ("9", "Пылесборник", "009012"),
    ("10", "Провод", "010123"),
    ("11", "Выключатель", "011234"),
    ("12", "Турбощетка", "012345"),
    ("13", "Трубка", "013456"),
    ("14", "Плата управления", "014567"),
    ("15", "Щелевая насадка", "015678"),
    ("16", "Ремень привода", "016789"),
];

/// Ordered, immutable list of catalog entries with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                bail!("duplicate catalog id {:?}", entry.id);
            }
        }
        Ok(Self { entries })
    }

    /// The reference vacuum cleaner parts list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|&(id, name, code)| CatalogEntry::new(id, name, code))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Self::new(entries)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    /// Resolves an identifier by exact id, then by exact printed code.
    ///
    /// The empty identifier never matches.
    pub fn lookup(&self, identifier: &str) -> Option<&CatalogEntry> {
        if identifier.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.id == identifier)
            .or_else(|| self.entries.iter().find(|entry| entry.code == identifier))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
