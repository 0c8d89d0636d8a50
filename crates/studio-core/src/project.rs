use crate::config::{ProjectConfig, ProjectDeclaration};
use crate::customize::{self, CustomizeReport};
use crate::documents;
use crate::error::{Result, StudioError};
use crate::milestone;
use crate::paths;
use crate::scaffold;
use crate::settings::StudioSettings;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Result of a successful `create_project`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedProject {
    pub path: PathBuf,
    pub folder: String,
    pub config: ProjectConfig,
    pub seed_files: Vec<PathBuf>,
    pub documents: Vec<PathBuf>,
    pub agents: CustomizeReport,
}

/// Parse a `YYYY-MM-DD` start date.
pub fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| StudioError::InvalidDate(s.to_string()))
}

/// Scaffold a new project, persist its config, write its documents and
/// customize its agents.
///
/// Milestones are counted from `start`; `now` stamps `project.created`.
/// Creating over an existing folder refreshes the generated files and
/// overwrites the config. Filesystem errors abort with no rollback.
pub fn create_project(
    settings: &StudioSettings,
    decl: ProjectDeclaration,
    start: NaiveDate,
    now: DateTime<Utc>,
) -> Result<CreatedProject> {
    paths::validate_project_name(&decl.name)?;

    let path = scaffold::generate(&settings.projects_dir, &decl.name, &decl.engine)?;
    let folder = paths::sanitize_project_name(&decl.name);
    if paths::project_config_path(&path).exists() {
        tracing::warn!(folder = %folder, "project already exists, overwriting its config");
    }

    let milestones = milestone::schedule(&decl.mode, &decl.timeline, start);
    if milestones.is_empty() {
        tracing::warn!(
            mode = %decl.mode,
            timeline = %decl.timeline,
            "no milestone schedule for this mode and timeline"
        );
    }

    let config = ProjectConfig::new(decl, milestones, now);
    config.save(&path)?;

    let documents = documents::write_project_documents(&path, &config)?;
    let seed_files = scaffold::write_seed_files(&path, &config.project.engine)?;
    let agents = customize::customize_agents_for_project(settings, &path, &config)?;

    tracing::info!(
        folder = %folder,
        agents = config.team.active_agents.len(),
        milestones = config.milestones.len(),
        "project created"
    );

    Ok(CreatedProject {
        path,
        folder,
        config,
        seed_files,
        documents,
        agents,
    })
}
