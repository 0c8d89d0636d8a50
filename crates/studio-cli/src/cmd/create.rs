use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use std::path::Path;
use studio_core::config::ProjectDeclaration;
use studio_core::project::{self, CreatedProject};

#[derive(Args)]
pub struct CreateArgs {
    /// Project name; the folder is its lowercase, hyphenated form
    #[arg(long)]
    pub name: String,

    /// One-sentence game concept
    #[arg(long, default_value = "")]
    pub concept: String,

    /// PC, Mobile, Console, Web or VR/AR
    #[arg(long, default_value = "PC")]
    pub platform: String,

    /// Casual, Core, Hardcore or Kids
    #[arg(long, default_value = "Core")]
    pub audience: String,

    /// design, development or prototype
    #[arg(long, default_value = "design")]
    pub mode: String,

    /// Rapid, Short, Medium or Long
    #[arg(long, default_value = "Short")]
    pub timeline: String,

    /// Godot, Unity, Unreal, or any other name (e.g. TBD)
    #[arg(long, default_value = "Godot")]
    pub engine: String,

    #[arg(long, default_value = "Action")]
    pub genre: String,

    /// Similar games
    #[arg(long, default_value = "")]
    pub competitors: String,

    /// Unique selling point
    #[arg(long, default_value = "")]
    pub usp: String,

    /// First day of the schedule, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub start_date: Option<String>,
}

impl CreateArgs {
    fn declaration(&self) -> ProjectDeclaration {
        ProjectDeclaration {
            name: self.name.trim().to_string(),
            concept: self.concept.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            audience: self.audience.clone(),
            timeline: self.timeline.clone(),
            engine: self.engine.clone(),
            mode: self.mode.clone(),
            competitors: self.competitors.clone(),
            unique_selling_point: self.usp.clone(),
        }
    }
}

pub fn run(root: &Path, args: CreateArgs, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let now = Utc::now();
    let start = match &args.start_date {
        Some(s) => project::parse_start_date(s)?,
        None => now.date_naive(),
    };

    let created = project::create_project(&settings, args.declaration(), start, now)
        .with_context(|| format!("failed to create project '{}'", args.name))?;

    if json {
        return print_json(&created);
    }
    print_summary(&created);
    Ok(())
}

fn print_summary(created: &CreatedProject) {
    let p = &created.config.project;
    let agents: Vec<&str> = created
        .config
        .team
        .active_agents
        .iter()
        .map(|r| r.as_str())
        .collect();

    println!("Created project: {}", p.name);
    println!("Location: {}", created.path.display());
    println!("Mode: {}", p.mode.to_uppercase());
    println!("Active Agents: {}", agents.len());
    println!("  - {}", agents.join(", "));

    println!("\nMilestones: {}", created.config.milestones.len());
    for m in &created.config.milestones {
        println!("  - {}: {}", m.name, m.target_date);
    }

    let report = &created.agents;
    println!(
        "\nAgents customized for {}: {} written, {} skipped",
        report.engine,
        report.written.len(),
        report.skipped.len()
    );
    for s in &report.skipped {
        println!("  skipped {}: {}", s.role, s.reason);
    }

    println!("\nNext steps:");
    println!("  1. cd {}", created.path.display());
    println!("  2. Review project-config.json for accuracy");
    println!("  3. Start with market analysis: agents/market_analyst.md");
    println!("  4. Then hand over to the orchestrator: agents/project_orchestrator.md");
}
