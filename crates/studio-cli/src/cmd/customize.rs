use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use studio_core::{customize, lifecycle};

pub fn run(root: &Path, project: &str, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let handle = lifecycle::find_project(&settings.projects_dir, project)
        .with_context(|| format!("failed to load project '{project}'"))?;

    let report = customize::customize_agents_for_project(&settings, &handle.path, &handle.config)
        .with_context(|| format!("failed to customize agents for '{project}'"))?;

    if json {
        return print_json(&report);
    }

    println!(
        "Customized {} agents for {} ({})",
        report.written.len(),
        handle.config.project.name,
        report.engine
    );
    for role in &report.written {
        println!("  wrote: agents/{}", role.filename());
    }
    for s in &report.skipped {
        println!("  skipped {}: {}", s.role, s.reason);
    }
    println!("  wrote: {}", report.orchestrator.display());
    Ok(())
}
