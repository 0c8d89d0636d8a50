//! Studio-level settings (`studio.yaml`).
//!
//! Every key is optional. A missing file yields the defaults, so a bare
//! checkout with `agents/` and `engine_configs/` next to it just works.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioSettings {
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,
    #[serde(default = "default_engine_configs_dir")]
    pub engine_configs_dir: PathBuf,
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PROJECTS_DIR)
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_AGENTS_DIR)
}

fn default_engine_configs_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_ENGINE_CONFIGS_DIR)
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            agents_dir: default_agents_dir(),
            engine_configs_dir: default_engine_configs_dir(),
        }
    }
}

impl StudioSettings {
    /// Load `root/studio.yaml` (defaults when absent) and resolve every
    /// relative directory against `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(paths::SETTINGS_FILE);
        let settings = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_yaml::from_str(&data)?
        } else {
            Self::default()
        };
        Ok(settings.resolved(root))
    }

    pub fn resolved(self, root: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };
        Self {
            projects_dir: resolve(self.projects_dir),
            agents_dir: resolve(self.agents_dir),
            engine_configs_dir: resolve(self.engine_configs_dir),
        }
    }
}
