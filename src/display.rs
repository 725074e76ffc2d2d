//! Named display targets for the dashboard
//!
//! The registry is the crate's stand-in for the page's metric tiles: a fixed
//! set of text targets identified by stable string keys. Writes are plain
//! text only, unknown keys are skipped silently, and concurrent writes are
//! last-write-wins with no ordering guarantee.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

pub const TOTAL_ANALYSES: &str = "total-analyses";
pub const TOTAL_SIMULATIONS: &str = "total-simulations";
pub const TOTAL_INNOVATIONS: &str = "total-innovations";
pub const UPTIME: &str = "uptime";

/// The fixed set of display target keys.
pub const TARGETS: &[&str] = &[TOTAL_ANALYSES, TOTAL_SIMULATIONS, TOTAL_INNOVATIONS, UPTIME];

/// Concurrent store of named text targets.
pub struct DisplayRegistry {
    targets: DashMap<String, String>,
    last_updated: RwLock<Option<DateTime<Utc>>>,
}

impl DisplayRegistry {
    /// Create a registry seeded with the known targets, all empty.
    pub fn new() -> Self {
        let targets = DashMap::new();
        for key in TARGETS {
            targets.insert((*key).to_string(), String::new());
        }
        Self {
            targets,
            last_updated: RwLock::new(None),
        }
    }

    /// Write plain text into a target. Returns whether the target exists;
    /// writes to unknown keys are skipped without error.
    pub fn set_text(&self, key: &str, value: &str) -> bool {
        match self.targets.get_mut(key) {
            Some(mut entry) => {
                *entry = value.to_string();
                *self.last_updated.write() = Some(Utc::now());
                true
            }
            None => {
                debug!(key, "no display target for key, skipping");
                false
            }
        }
    }

    /// Current text of a target.
    pub fn text(&self, key: &str) -> Option<String> {
        self.targets.get(key).map(|entry| entry.clone())
    }

    /// When any target was last written, if ever.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.last_updated.read()
    }
}

impl Default for DisplayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a scalar JSON value as display text.
///
/// Objects and arrays have no text rendering and yield `None`, so callers
/// skip them rather than injecting structure into a text target.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// Human-readable timestamp for "last updated" style labels.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %H:%M").to_string()
}
