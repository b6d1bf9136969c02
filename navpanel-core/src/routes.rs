//! Route model — the two ordered groups of navigation entries.
//!
//! The primary group sits at the top of the panel, the secondary group at the
//! bottom next to the theme switch. Both are fixed once the model is built.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Selected path used when there are no primary routes.
pub const FALLBACK_PATH: &str = "/";

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub id: String,
    pub label: String,
    #[serde(rename = "icon")]
    pub icon_key: String,
    pub path: String,
}

impl RouteEntry {
    pub fn new(id: &str, label: &str, icon_key: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon_key: icon_key.to_string(),
            path: path.to_string(),
        }
    }
}

/// Which of the two groups an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteGroup {
    /// Top group, revealed first, staggered downward.
    Primary,
    /// Bottom group, revealed second, staggered upward.
    Secondary,
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteGroup::Primary => f.write_str("primary"),
            RouteGroup::Secondary => f.write_str("secondary"),
        }
    }
}

/// Validated, immutable route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteModel {
    primary: Vec<RouteEntry>,
    secondary: Vec<RouteEntry>,
}

impl RouteModel {
    /// Build a model, rejecting empty or duplicate ids and paths within a group.
    ///
    /// The two groups may share a path with each other; that is aliasing the
    /// caller asked for and is left alone.
    pub fn new(primary: Vec<RouteEntry>, secondary: Vec<RouteEntry>) -> Result<Self, ConfigError> {
        validate_group(RouteGroup::Primary, &primary)?;
        validate_group(RouteGroup::Secondary, &secondary)?;
        Ok(Self { primary, secondary })
    }

    /// The dashboard routes the panel ships with.
    pub fn default_routes() -> Self {
        Self {
            primary: vec![
                RouteEntry::new("home", "Home", "house", "/"),
                RouteEntry::new("sales", "Sales", "chart-line", "/sales"),
                RouteEntry::new("costs", "Costs", "chart-column", "/costs"),
                RouteEntry::new("payments", "Payments", "wallet", "/payments"),
                RouteEntry::new("finances", "Finances", "chart-pie", "/finances"),
                RouteEntry::new("messages", "Messages", "envelope", "/messages"),
            ],
            secondary: vec![
                RouteEntry::new("settings", "Settings", "sliders", "/settings"),
                RouteEntry::new("support", "Support", "phone-volume", "/support"),
            ],
        }
    }

    pub fn primary(&self) -> &[RouteEntry] {
        &self.primary
    }

    pub fn secondary(&self) -> &[RouteEntry] {
        &self.secondary
    }

    pub fn group(&self, group: RouteGroup) -> &[RouteEntry] {
        match group {
            RouteGroup::Primary => &self.primary,
            RouteGroup::Secondary => &self.secondary,
        }
    }

    /// All entries in display order: primary first, then secondary.
    pub fn iter(&self) -> impl Iterator<Item = (RouteGroup, &RouteEntry)> {
        self.primary
            .iter()
            .map(|e| (RouteGroup::Primary, e))
            .chain(self.secondary.iter().map(|e| (RouteGroup::Secondary, e)))
    }

    /// Entry at a display-order index across both groups.
    pub fn nth(&self, index: usize) -> Option<(RouteGroup, &RouteEntry)> {
        self.iter().nth(index)
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path selected before the user picks anything.
    pub fn default_path(&self) -> &str {
        self.primary
            .first()
            .map(|e| e.path.as_str())
            .unwrap_or(FALLBACK_PATH)
    }

    /// First entry (in display order) with the given path.
    pub fn find_by_path(&self, path: &str) -> Option<(RouteGroup, &RouteEntry)> {
        self.iter().find(|(_, e)| e.path == path)
    }

    /// First entry (in display order) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<(RouteGroup, &RouteEntry)> {
        self.iter().find(|(_, e)| e.id == id)
    }
}

impl Default for RouteModel {
    fn default() -> Self {
        Self::default_routes()
    }
}

fn validate_group(group: RouteGroup, entries: &[RouteEntry]) -> Result<(), ConfigError> {
    let mut ids = HashSet::new();
    let mut paths = HashSet::new();
    for entry in entries {
        if entry.id.is_empty() {
            return Err(ConfigError::EmptyId { group });
        }
        if !ids.insert(entry.id.as_str()) {
            return Err(ConfigError::DuplicateId {
                group,
                id: entry.id.clone(),
            });
        }
        if entry.path.is_empty() {
            return Err(ConfigError::EmptyPath {
                group,
                id: entry.id.clone(),
            });
        }
        if !paths.insert(entry.path.as_str()) {
            return Err(ConfigError::DuplicatePath {
                group,
                path: entry.path.clone(),
            });
        }
    }
    Ok(())
}
