//! Project lifecycle: list, look up, resume, freeze and start over.
//!
//! Every mutation is load, modify, then one whole-document save as the last
//! step. Start-over is split into `StartOverPlan::prepare` and `confirm` so
//! the caller can ask for confirmation in between without holding any state
//! beyond the plan.

use crate::config::{ProjectConfig, ProjectStatus};
use crate::error::{Result, StudioError};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub display_name: String,
    pub folder: String,
    pub path: PathBuf,
    pub status: ProjectStatus,
    pub phase: String,
    pub mode: String,
    pub engine: String,
    pub created: DateTime<Utc>,
    pub last_modified: Option<DateTime<Utc>>,
    pub agent_count: usize,
    pub current_milestone: Option<String>,
    /// Folder looks like a start-over backup (`<name>_backup_<ts>`).
    pub is_backup: bool,
}

impl ProjectSummary {
    fn from_config(folder: &str, path: &Path, config: &ProjectConfig) -> Self {
        let last_modified = std::fs::metadata(paths::project_config_path(path))
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        Self {
            display_name: config.project.name.clone(),
            folder: folder.to_string(),
            path: path.to_path_buf(),
            status: config.project.status,
            phase: config.project.phase.clone(),
            mode: config.project.mode.clone(),
            engine: config.project.engine.clone(),
            created: config.project.created,
            last_modified,
            agent_count: config.team.active_agents.len(),
            current_milestone: config.milestones.first().map(|m| m.name.clone()),
            is_backup: paths::is_backup_folder(folder),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedProject {
    pub folder: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectListing {
    pub projects: Vec<ProjectSummary>,
    pub skipped: Vec<SkippedProject>,
}

/// Folders under `projects_dir` that contain a config file, sorted by name.
fn project_folders(projects_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !projects_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(projects_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() || !paths::project_config_path(&path).is_file() {
            continue;
        }
        folders.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    folders.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(folders)
}

/// Read-only fold over every project. Unreadable configs are skipped with a
/// warning rather than failing the listing.
pub fn list_projects(projects_dir: &Path) -> Result<ProjectListing> {
    let mut listing = ProjectListing::default();
    for (folder, path) in project_folders(projects_dir)? {
        match ProjectConfig::load(&path) {
            Ok(config) => listing
                .projects
                .push(ProjectSummary::from_config(&folder, &path, &config)),
            Err(e) => {
                tracing::warn!(folder = %folder, error = %e, "could not read project config");
                listing.skipped.push(SkippedProject {
                    folder,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(listing)
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// A resolved project with its freshly loaded config.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectHandle {
    pub folder: String,
    pub path: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectHandle {
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary::from_config(&self.folder, &self.path, &self.config)
    }

    fn save(&self) -> Result<()> {
        self.config.save(&self.path)
    }
}

fn open_folder(projects_dir: &Path, folder: &str) -> Option<Result<ProjectHandle>> {
    if !paths::is_single_folder(folder) {
        return None;
    }
    let path = projects_dir.join(folder);
    if !paths::project_config_path(&path).is_file() {
        return None;
    }
    Some(ProjectConfig::load(&path).map(|config| ProjectHandle {
        folder: folder.to_string(),
        path,
        config,
    }))
}

/// Resolve `name` as a folder name, then as a name that sanitizes to a
/// folder, then as a display name. A matching folder with an unreadable
/// config is an error, not a miss.
pub fn find_project(projects_dir: &Path, name: &str) -> Result<ProjectHandle> {
    if let Some(found) = open_folder(projects_dir, name) {
        return found;
    }
    let sanitized = paths::sanitize_project_name(name);
    if sanitized != name {
        if let Some(found) = open_folder(projects_dir, &sanitized) {
            return found;
        }
    }
    for (folder, path) in project_folders(projects_dir)? {
        let Ok(config) = ProjectConfig::load(&path) else {
            continue;
        };
        if config.project.name == name {
            return Ok(ProjectHandle {
                folder,
                path,
                config,
            });
        }
    }
    Err(StudioError::ProjectNotFound(name.to_string()))
}

// ---------------------------------------------------------------------------
// Resume / freeze
// ---------------------------------------------------------------------------

/// Mark a project active again. Valid from any status.
pub fn resume(projects_dir: &Path, name: &str, now: DateTime<Utc>) -> Result<ProjectHandle> {
    let mut handle = find_project(projects_dir, name)?;
    let previous = handle.config.project.status;
    handle.config.mark_resumed(now);
    handle.save()?;
    tracing::info!(folder = %handle.folder, from = %previous, "project resumed");
    Ok(handle)
}

pub fn freeze(
    projects_dir: &Path,
    name: &str,
    reason: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ProjectHandle> {
    let mut handle = find_project(projects_dir, name)?;
    handle.config.mark_frozen(reason, now);
    handle.save()?;
    tracing::info!(folder = %handle.folder, "project frozen");
    Ok(handle)
}

// ---------------------------------------------------------------------------
// Start over
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StartOverReport {
    pub folder: String,
    pub display_name: String,
    pub backup_path: PathBuf,
    pub removed_documents: usize,
    pub config: ProjectConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StartOverOutcome {
    Completed(StartOverReport),
    /// The user declined; nothing was touched.
    Cancelled { folder: String },
}

/// A resolved start-over awaiting confirmation.
#[derive(Debug)]
pub struct StartOverPlan {
    projects_dir: PathBuf,
    project: ProjectHandle,
}

impl StartOverPlan {
    pub fn prepare(projects_dir: &Path, name: &str) -> Result<Self> {
        let project = find_project(projects_dir, name)?;
        Ok(Self {
            projects_dir: projects_dir.to_path_buf(),
            project,
        })
    }

    pub fn project(&self) -> &ProjectHandle {
        &self.project
    }

    pub fn backup_path(&self, now: DateTime<Utc>) -> PathBuf {
        paths::backup_dir(&self.projects_dir, &self.project.folder, now)
    }

    pub fn cancel(self) -> StartOverOutcome {
        tracing::info!(folder = %self.project.folder, "start over cancelled");
        StartOverOutcome::Cancelled {
            folder: self.project.folder,
        }
    }

    /// Back up, then reset. Nothing in the project is modified unless the
    /// backup completed; a partially written backup is removed.
    pub fn confirm(self, now: DateTime<Utc>) -> Result<StartOverOutcome> {
        let project_dir = &self.project.path;
        let backup = self.backup_path(now);

        if backup.exists() {
            return Err(StudioError::BackupFailed {
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "backup path already exists",
                ),
                path: backup,
            });
        }
        if let Err(source) = io::copy_dir_all(project_dir, &backup) {
            if source.kind() != std::io::ErrorKind::AlreadyExists && backup.exists() {
                if let Err(e) = std::fs::remove_dir_all(&backup) {
                    tracing::warn!(path = %backup.display(), error = %e, "could not remove partial backup");
                }
            }
            return Err(StudioError::BackupFailed {
                path: backup,
                source,
            });
        }
        tracing::info!(backup = %backup.display(), "project backed up");

        let mut config = ProjectConfig::load(project_dir)?;
        config.mark_reset(&backup, now);
        config.save(project_dir)?;

        let removed = io::remove_files_except(
            &paths::documentation_dir(project_dir),
            paths::TEMPLATE_SUFFIX,
        )?;
        tracing::info!(folder = %self.project.folder, removed, "project reset");

        Ok(StartOverOutcome::Completed(StartOverReport {
            folder: self.project.folder.clone(),
            display_name: config.project.name.clone(),
            backup_path: backup,
            removed_documents: removed,
            config,
        }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
