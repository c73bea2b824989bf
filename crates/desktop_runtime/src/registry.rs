//! Static window registry loaded from the build-time manifest catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

include!(concat!(env!("OUT_DIR"), "/window_manifest_generated.rs"));

const WINDOW_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockSlot {
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: WindowId,
    pub title: String,
    /// Triggers may only open this window when set.
    pub can_open: bool,
    pub nav_label: Option<String>,
    pub dock: Option<DockSlot>,
}

/// Dock button derived from a registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub id: WindowId,
    pub label: String,
    pub icon: String,
    pub can_open: bool,
}

/// Nav bar link derived from a registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: WindowId,
    pub label: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("window manifest is malformed: {0}")]
    Parse(String),
    #[error("window manifest schema mismatch: expected {expected} found {found}")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("unknown window id `{0}`")]
    UnknownWindow(String),
    #[error("window `{0}` is registered twice")]
    DuplicateWindow(WindowId),
    #[error("window `{0}` is missing from the registry")]
    MissingWindow(WindowId),
}

#[derive(Debug, Deserialize)]
struct RawDockSlot {
    label: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct RawWindowEntry {
    id: String,
    title: String,
    can_open: bool,
    #[serde(default)]
    nav_label: Option<String>,
    #[serde(default)]
    dock: Option<RawDockSlot>,
}

#[derive(Debug, Deserialize)]
struct RawWindowManifest {
    schema_version: u32,
    window: Vec<RawWindowEntry>,
}

/// Ordered, validated set of window entries. Covers every [`WindowId`] exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for WindowRegistry {
    /// Every window with its key as title, no triggers, archive disabled.
    fn default() -> Self {
        Self {
            entries: WindowId::ALL
                .into_iter()
                .map(|id| RegistryEntry {
                    id,
                    title: id.key().to_string(),
                    can_open: id != WindowId::Trash,
                    nav_label: None,
                    dock: None,
                })
                .collect(),
        }
    }
}

impl WindowRegistry {
    /// Registry compiled from `windows.manifest.toml`.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_manifest_json(WINDOW_MANIFEST_JSON)
    }

    pub fn from_manifest_json(raw: &str) -> Result<Self, RegistryError> {
        let manifest: RawWindowManifest =
            serde_json::from_str(raw).map_err(|err| RegistryError::Parse(err.to_string()))?;
        if manifest.schema_version != WINDOW_MANIFEST_SCHEMA_VERSION {
            return Err(RegistryError::SchemaVersion {
                expected: WINDOW_MANIFEST_SCHEMA_VERSION,
                found: manifest.schema_version,
            });
        }

        let entries = manifest
            .window
            .into_iter()
            .map(|raw| {
                let id = WindowId::from_key(&raw.id)
                    .ok_or_else(|| RegistryError::UnknownWindow(raw.id.clone()))?;
                Ok(RegistryEntry {
                    id,
                    title: raw.title,
                    can_open: raw.can_open,
                    nav_label: raw.nav_label,
                    dock: raw.dock.map(|dock| DockSlot {
                        label: dock.label,
                        icon: dock.icon,
                    }),
                })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self, RegistryError> {
        let mut seen = [false; WindowId::COUNT];
        for entry in &entries {
            let slot = &mut seen[entry.id.index()];
            if *slot {
                return Err(RegistryError::DuplicateWindow(entry.id));
            }
            *slot = true;
        }
        if let Some(missing) = WindowId::ALL.into_iter().find(|id| !seen[id.index()]) {
            return Err(RegistryError::MissingWindow(missing));
        }
        Ok(Self { entries })
    }

    /// Window ids in registry order.
    pub fn list_window_ids(&self) -> Vec<WindowId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn entry(&self, id: WindowId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn is_openable(&self, id: WindowId) -> bool {
        self.entry(id).map(|entry| entry.can_open).unwrap_or(false)
    }

    pub fn title(&self, id: WindowId) -> &str {
        self.entry(id)
            .map(|entry| entry.title.as_str())
            .unwrap_or(id.key())
    }

    /// Validates an untyped identifier coming from outside the type system.
    pub fn resolve(&self, key: &str) -> Result<WindowId, RegistryError> {
        WindowId::from_key(key.trim())
            .filter(|id| self.entry(*id).is_some())
            .ok_or_else(|| RegistryError::UnknownWindow(key.to_string()))
    }

    pub fn dock_entries(&self) -> Vec<DockItem> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry.dock.as_ref().map(|dock| DockItem {
                    id: entry.id,
                    label: dock.label.clone(),
                    icon: dock.icon.clone(),
                    can_open: entry.can_open,
                })
            })
            .collect()
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry.nav_label.as_ref().map(|label| NavLink {
                    id: entry.id,
                    label: label.clone(),
                })
            })
            .collect()
    }
}
