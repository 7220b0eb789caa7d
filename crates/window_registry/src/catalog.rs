//! Seed catalog of registered windows.
//!
//! The built-in catalog lives in `catalog/windows.toml`; the build script validates it and
//! embeds it as JSON so a running shell never touches the filesystem.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    HiddenSurfaces, TaskbarBadge, WindowCategory, WindowDescriptor, WindowName, WindowPos,
    WindowSize,
};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("window catalog is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("embedded window catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("window catalog schema mismatch: expected 1 found {found}")]
    SchemaMismatch { found: u32 },
    #[error("window catalog entry has a blank name")]
    BlankName,
    #[error("window `{0}` is declared more than once")]
    DuplicateName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub category: WindowCategory,
    pub icon: String,
    #[serde(default)]
    pub size: Option<WindowSize>,
    #[serde(default)]
    pub pos: Option<WindowPos>,
    #[serde(default)]
    pub hidden: HiddenSurfaces,
    #[serde(default)]
    pub badge: Option<TaskbarBadge>,
    #[serde(default)]
    pub frameless: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: u32,
    #[serde(default, rename = "window")]
    pub windows: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaMismatch {
                found: self.schema_version,
            });
        }
        let mut seen = BTreeSet::new();
        for entry in &self.windows {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::BlankName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(())
    }

    /// Builds the initial descriptor list: everything closed, orders `1..=n` in catalog order.
    pub fn descriptors(&self) -> Vec<WindowDescriptor> {
        self.windows
            .iter()
            .enumerate()
            .map(|(idx, entry)| WindowDescriptor {
                name: WindowName::new(entry.name.clone()),
                title: entry.title.clone(),
                category: entry.category,
                icon_id: entry.icon.clone(),
                open: false,
                minimize: None,
                fullscreen: false,
                order: idx as u64 + 1,
                size: entry.size,
                pos: entry.pos,
                hidden: entry.hidden,
                badge: entry.badge,
                frameless: entry.frameless,
                small_task: false,
                hover_small_task: false,
            })
            .collect()
    }
}

/// Parses the catalog embedded at build time.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json_str(WINDOW_CATALOG_JSON)
}
