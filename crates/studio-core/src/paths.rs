use crate::error::{Result, StudioError};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SETTINGS_FILE: &str = "studio.yaml";
pub const DEFAULT_PROJECTS_DIR: &str = "projects";
pub const DEFAULT_AGENTS_DIR: &str = "agents";
pub const DEFAULT_ENGINE_CONFIGS_DIR: &str = "engine_configs";

pub const PROJECT_CONFIG_FILE: &str = "project-config.json";
pub const PROJECT_AGENTS_DIR: &str = "agents";
pub const DOCUMENTATION_DIR: &str = "documentation";
pub const SOURCE_DIR: &str = "source";

pub const GDD_FILE: &str = "documentation/design/gdd.md";
pub const TIMELINE_FILE: &str = "documentation/production/timeline.md";
pub const SOURCE_README_FILE: &str = "source/README.md";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const ORCHESTRATOR_FILE: &str = "project_orchestrator.md";

/// Documentation files ending in this suffix survive a start-over.
pub const TEMPLATE_SUFFIX: &str = "_template.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Folder name for a project: lowercase, spaces replaced with hyphens.
pub fn sanitize_project_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// True when `name` is exactly one ordinary path component: no separators,
/// no `.` or `..`, not absolute.
pub fn is_single_folder(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// A name is usable when it is not blank and its folder form stays inside
/// the projects directory.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || !is_single_folder(&sanitize_project_name(name)) {
        return Err(StudioError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

pub fn project_dir(projects_dir: &Path, name: &str) -> PathBuf {
    projects_dir.join(sanitize_project_name(name))
}

pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_FILE)
}

pub fn project_agents_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_AGENTS_DIR)
}

pub fn documentation_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(DOCUMENTATION_DIR)
}

pub fn base_template_path(agents_dir: &Path, role: &str) -> PathBuf {
    agents_dir.join(format!("{role}.md"))
}

/// "Unreal Engine" maps to `unreal`; anything else is lowercased with
/// spaces removed.
pub fn engine_config_key(engine: &str) -> String {
    match engine {
        "Unreal Engine" => "unreal".to_string(),
        other => other.to_lowercase().replace(' ', ""),
    }
}

pub fn engine_config_filename(engine: &str) -> String {
    format!("{}_config.json", engine_config_key(engine))
}

pub fn engine_config_path(engine_configs_dir: &Path, engine: &str) -> PathBuf {
    engine_configs_dir.join(engine_config_filename(engine))
}

pub fn backup_dir(projects_dir: &Path, folder: &str, at: DateTime<Utc>) -> PathBuf {
    projects_dir.join(format!("{folder}_backup_{}", at.format("%Y%m%d_%H%M%S")))
}

// ---------------------------------------------------------------------------
// Backup folder recognition
// ---------------------------------------------------------------------------

static BACKUP_RE: OnceLock<Regex> = OnceLock::new();

fn backup_re() -> &'static Regex {
    BACKUP_RE.get_or_init(|| Regex::new(r"^.+_backup_\d{8}_\d{6}$").unwrap())
}

pub fn is_backup_folder(folder: &str) -> bool {
    backup_re().is_match(folder)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sanitize_lowercases_and_hyphenates() {
        assert_eq!(sanitize_project_name("Star Forge"), "star-forge");
        assert_eq!(sanitize_project_name("My  Game"), "my--game");
        assert_eq!(sanitize_project_name("already-ok"), "already-ok");
    }

    #[test]
    fn invalid_project_names() {
        for name in ["", "   "] {
            assert!(validate_project_name(name).is_err(), "expected invalid: {name:?}");
        }
        validate_project_name("Star Forge").unwrap();
        validate_project_name("v1.2 remaster").unwrap();
    }

    #[test]
    fn names_that_leave_projects_dir_are_rejected() {
        for name in ["../escaped", "..", ".", "a/b", "/abs", "a\\b", "..\\up", "Star/Forge"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(StudioError::InvalidProjectName(_))
                ),
                "expected invalid: {name:?}"
            );
        }
        assert!(is_single_folder("star-forge"));
        assert!(!is_single_folder("../star-forge"));
    }

    #[test]
    fn engine_config_keys() {
        let dir = Path::new("/studio/engine_configs");
        assert_eq!(
            engine_config_path(dir, "Unreal Engine"),
            PathBuf::from("/studio/engine_configs/unreal_config.json")
        );
        assert_eq!(
            engine_config_path(dir, "Unreal"),
            PathBuf::from("/studio/engine_configs/unreal_config.json")
        );
        assert_eq!(
            engine_config_path(dir, "Godot"),
            PathBuf::from("/studio/engine_configs/godot_config.json")
        );
        assert_eq!(
            engine_config_path(dir, "Game Maker"),
            PathBuf::from("/studio/engine_configs/gamemaker_config.json")
        );
    }

    #[test]
    fn backup_dir_is_timestamped() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = backup_dir(Path::new("/p"), "star-forge", at);
        assert_eq!(path, PathBuf::from("/p/star-forge_backup_20240309_140507"));
        assert!(is_backup_folder("star-forge_backup_20240309_140507"));
        assert!(!is_backup_folder("star-forge"));
        assert!(!is_backup_folder("star-forge_backup_2024"));
    }
}
