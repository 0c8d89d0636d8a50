use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use std::path::Path;
use studio_core::lifecycle;

pub fn run(root: &Path, project: &str, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let handle = lifecycle::resume(&settings.projects_dir, project, Utc::now())
        .with_context(|| format!("failed to resume project '{project}'"))?;

    if json {
        return print_json(&handle.summary());
    }

    let p = &handle.config.project;
    let agents: Vec<&str> = handle
        .config
        .team
        .active_agents
        .iter()
        .map(|r| r.as_str())
        .collect();

    println!("Resumed project: {}", p.name);
    println!("Location: {}", handle.path.display());
    println!("Current Phase: {}", p.phase);
    println!("Mode: {}", p.mode);
    println!("Active Agents: {}", agents.join(", "));

    println!("\nNext steps:");
    for (i, step) in next_steps(&p.phase, &p.name).iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    Ok(())
}

fn next_steps(phase: &str, name: &str) -> Vec<String> {
    match phase {
        "Market Analysis" => vec![
            "Start with market analysis: agents/market_analyst.md".to_string(),
            "Then continue with the orchestrator: agents/project_orchestrator.md".to_string(),
        ],
        "Initialization" => vec![format!(
            "Resume {name} with the orchestrator: agents/project_orchestrator.md"
        )],
        _ => vec![
            format!("Continue {name} with the producer: agents/producer_agent.md"),
            "Review project-config.json for a status report".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_by_phase() {
        assert_eq!(next_steps("Market Analysis", "X").len(), 2);
        assert!(next_steps("Initialization", "X")[0].contains("project_orchestrator"));
        assert!(next_steps("Beta", "X")[0].contains("producer_agent"));
    }
}
