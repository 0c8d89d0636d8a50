use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use std::path::Path;
use studio_core::lifecycle;

pub fn run(root: &Path, project: &str, reason: Option<&str>, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let handle = lifecycle::freeze(&settings.projects_dir, project, reason, Utc::now())
        .with_context(|| format!("failed to freeze project '{project}'"))?;

    if json {
        return print_json(&handle.summary());
    }

    println!("Project '{}' has been frozen.", handle.config.project.name);
    if let Some(reason) = &handle.config.project.freeze_reason {
        println!("Reason: {reason}");
    }
    println!("To resume later: studio resume {}", handle.folder);
    Ok(())
}
