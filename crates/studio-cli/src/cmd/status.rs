use crate::output::{print_json, print_table, short_date};
use anyhow::Context;
use std::path::Path;
use studio_core::lifecycle::{self, ProjectSummary};

pub fn run(root: &Path, project: Option<&str>, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;

    if let Some(name) = project {
        let handle = lifecycle::find_project(&settings.projects_dir, name)
            .with_context(|| format!("failed to load project '{name}'"))?;
        let summary = handle.summary();
        if json {
            return print_json(&summary);
        }
        print_detail(&summary);
        return Ok(());
    }

    let listing = lifecycle::list_projects(&settings.projects_dir).with_context(|| {
        format!("failed to list projects in {}", settings.projects_dir.display())
    })?;

    if json {
        return print_json(&listing);
    }

    if listing.projects.is_empty() {
        println!("No projects found.");
        println!("\nCreate your first project with: studio create --name <name>");
    } else {
        let rows: Vec<Vec<String>> = listing
            .projects
            .iter()
            .map(|p| {
                vec![
                    p.display_name.clone(),
                    p.folder.clone(),
                    p.status.to_string(),
                    p.phase.clone(),
                    p.mode.clone(),
                    short_date(&p.created),
                    p.last_modified.as_ref().map(short_date).unwrap_or_default(),
                ]
            })
            .collect();
        print_table(
            &["NAME", "FOLDER", "STATUS", "PHASE", "MODE", "CREATED", "MODIFIED"],
            &rows,
        );
        println!("\nTotal projects: {}", listing.projects.len());
    }

    for s in &listing.skipped {
        eprintln!("warning: skipped {}: {}", s.folder, s.reason);
    }
    Ok(())
}

fn print_detail(p: &ProjectSummary) {
    println!("{}", p.display_name);
    println!("  Folder: {}", p.folder);
    println!("  Status: {}", p.status.as_str().to_uppercase());
    println!("  Phase: {}", p.phase);
    println!("  Mode: {}", p.mode);
    println!("  Engine: {}", p.engine);
    println!("  Created: {}", short_date(&p.created));
    if let Some(modified) = &p.last_modified {
        println!("  Modified: {}", short_date(modified));
    }
    println!("  Agents: {} active", p.agent_count);
    if let Some(m) = &p.current_milestone {
        println!("  Current Milestone: {m}");
    }
    if p.is_backup {
        println!("  (start-over backup)");
    }
}
