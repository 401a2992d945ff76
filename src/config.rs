//! Configuration types.
//!
//! Small, serde-backed configuration in the shape the CLI consumes. Slot
//! names make the old/new revision selection explicit and configurable.

use crate::error::{BomMergeError, Result};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the slot holding the older revision.
pub const DEFAULT_OLD_SLOT: &str = "old";
/// Default name of the slot holding the newer revision.
pub const DEFAULT_NEW_SLOT: &str = "new";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot slot naming
    pub slots: SlotConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Validate the configuration, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.slots.old.is_empty() || self.slots.new.is_empty() {
            return Err(BomMergeError::Config(
                "snapshot slot names must not be empty".to_string(),
            ));
        }
        if self.slots.old == self.slots.new {
            return Err(BomMergeError::Config(format!(
                "old and new snapshot slots must differ (both are '{}')",
                self.slots.old
            )));
        }
        Ok(())
    }
}

/// Names of the snapshot slots the comparator reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub old: String,
    pub new: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            old: DEFAULT_OLD_SLOT.to_string(),
            new: DEFAULT_NEW_SLOT.to_string(),
        }
    }
}

/// Where and how results are emitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Write to this file instead of stdout
    pub file: Option<PathBuf>,
}

/// Behavior flags shared by all commands.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slots.old, "old");
        assert_eq!(config.slots.new, "new");
    }

    #[test]
    fn identical_slots_are_rejected() {
        let mut config = AppConfig::default();
        config.slots.new = "old".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"slots": {"old": "baseline"}}"#).unwrap();
        assert_eq!(config.slots.old, "baseline");
        assert_eq!(config.slots.new, "new");
        assert!(!config.behavior.quiet);
    }
}
