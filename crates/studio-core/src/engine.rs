//! Per-engine guidance loaded from `<engine_configs_dir>/<key>_config.json`.
//!
//! Engine configs are read-only inputs. A missing file is not an error: the
//! caller gets an empty config named after the requested engine, so projects
//! on unlisted engines ("TBD", "Bevy") still customize cleanly.

use crate::error::{Result, StudioError};
use crate::paths;
use crate::types::EngineKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestPractices {
    #[serde(default)]
    pub naming_conventions: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name used in generated prose ("Unreal Engine").
    pub engine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub best_practices: BestPractices,
    /// Keyed by role id.
    #[serde(default)]
    pub agent_specializations: BTreeMap<String, Specialization>,
}

impl EngineConfig {
    /// The empty fallback for an engine with no config file.
    pub fn empty(engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
            version: None,
            best_practices: BestPractices::default(),
            agent_specializations: BTreeMap::new(),
        }
    }

    pub fn load(engine_configs_dir: &Path, engine: &str) -> Result<Self> {
        let path = paths::engine_config_path(engine_configs_dir, engine);
        if !path.exists() {
            tracing::warn!(engine, path = %path.display(), "no engine config found, using defaults");
            return Ok(Self::empty(engine));
        }
        let data = std::fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|source| StudioError::MalformedConfig { path, source })
    }

    pub fn kind(&self) -> Option<EngineKind> {
        EngineKind::from_name(&self.engine)
    }

    pub fn specialization(&self, role: &str) -> Option<&Specialization> {
        self.agent_specializations.get(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_empty_default() {
        let dir = TempDir::new().unwrap();
        let cfg = EngineConfig::load(dir.path(), "TBD").unwrap();
        assert_eq!(cfg, EngineConfig::empty("TBD"));
        assert_eq!(cfg.engine, "TBD");
        assert!(cfg.kind().is_none());
    }

    #[test]
    fn loads_unreal_by_display_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("unreal_config.json"),
            r#"{
                "engine": "Unreal Engine",
                "version": "5.3",
                "best_practices": {
                    "naming_conventions": {"blueprints": "BP_ prefix"},
                    "folder_structure": "Content/"
                },
                "agent_specializations": {
                    "mechanics_developer": {"focus": ["Gameplay Framework"], "tools": ["Rider"]}
                }
            }"#,
        )
        .unwrap();

        let cfg = EngineConfig::load(dir.path(), "Unreal Engine").unwrap();
        assert_eq!(cfg.kind(), Some(EngineKind::Unreal));
        assert_eq!(cfg.version.as_deref(), Some("5.3"));
        assert_eq!(cfg.best_practices.naming_conventions["blueprints"], "BP_ prefix");
        assert!(cfg.best_practices.extra.contains_key("folder_structure"));
        assert_eq!(
            cfg.specialization("mechanics_developer").unwrap().focus,
            vec!["Gameplay Framework"]
        );
        assert!(cfg.specialization("qa_agent").is_none());

        // The short project name resolves to the same file.
        assert_eq!(EngineConfig::load(dir.path(), "Unreal").unwrap(), cfg);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("godot_config.json"), "{ not json").unwrap();
        assert!(matches!(
            EngineConfig::load(dir.path(), "Godot"),
            Err(StudioError::MalformedConfig { .. })
        ));
    }
}
