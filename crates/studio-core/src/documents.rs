use crate::config::ProjectConfig;
use crate::error::Result;
use crate::io::atomic_write;
use crate::paths;
use serde_json::Value;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Render the design brief (`documentation/design/gdd.md`).
pub fn render_gdd(config: &ProjectConfig) -> String {
    let p = &config.project;
    let monetization = p
        .extra
        .get("monetization")
        .and_then(Value::as_str)
        .unwrap_or("Not Applicable");
    format!(
        "# {name} - Game Design Document\n\n\
         ## Overview\n\
         **Concept**: {concept}\n\
         **Genre**: {genre}\n\
         **Platform**: {platform}\n\
         **Target Audience**: {audience}\n\n\
         ## Design Pillars\n\
         1. [Core Pillar 1]\n\
         2. [Core Pillar 2]\n\
         3. [Core Pillar 3]\n\n\
         ## Core Gameplay Loop\n\
         [Describe the 30-second loop]\n\n\
         ## Game Systems\n\
         [To be filled by Sr Game Designer]\n\n\
         ## Content Specifications\n\
         [To be filled by Mid Game Designer]\n\n\
         ## Technical Requirements\n\
         **Engine**: {engine}\n\
         **Performance Targets**: {perf}\n\n\
         ## Art Direction\n\
         [To be filled by Sr Game Artist]\n\n\
         ## UI/UX Design\n\
         [To be filled by UI/UX Agent]\n\n\
         ## Audio Design\n\
         [Placeholder for audio specifications]\n\n\
         ## Monetization Strategy\n\
         {monetization}\n\n\
         ## Success Metrics\n\
         - [Metric 1]\n\
         - [Metric 2]\n\
         - [Metric 3]\n",
        name = p.name,
        concept = p.concept,
        genre = p.genre,
        platform = p.platform,
        audience = p.audience,
        engine = p.engine,
        perf = config.metrics.performance_target,
    )
}

/// Render `source/README.md`.
pub fn render_source_readme(config: &ProjectConfig) -> String {
    let p = &config.project;
    let agents: Vec<&str> = config.team.active_agents.iter().map(|r| r.as_str()).collect();
    format!(
        "# {name} - Source Code\n\n\
         ## Engine: {engine}\n\n\
         ## Project Structure\n\
         - `/assets` - All game assets (art, audio, etc.)\n\
         - `/scripts` - Game logic and systems\n\
         - `/scenes` - Game scenes/levels\n\
         - `/prefabs` - Reusable game objects\n\n\
         ## Setup Instructions\n\
         1. [Engine-specific setup steps]\n\
         2. [Dependencies installation]\n\
         3. [Build configuration]\n\n\
         ## Development Guidelines\n\
         - Follow the coding standards in `/documentation/technical/`\n\
         - All commits must pass QA validation\n\
         - Use semantic versioning for releases\n\n\
         ## Active Agents\n\
         {agents}\n\n\
         ## Current Phase\n\
         {phase}\n",
        name = p.name,
        engine = p.engine,
        agents = agents.join(", "),
        phase = p.phase,
    )
}

/// Render `documentation/production/timeline.md`. An empty schedule still
/// produces the heading and an empty milestone section.
pub fn render_timeline(config: &ProjectConfig) -> String {
    let p = &config.project;
    let mut out = format!(
        "# {} - Production Timeline\n\n## Project Timeline: {}\n\n## Milestones\n",
        p.name, p.timeline
    );
    for m in &config.milestones {
        let _ = write!(
            out,
            "\n### {} - {}\n**Deliverables**:\n",
            m.name,
            m.target_date.format("%Y-%m-%d")
        );
        for d in &m.deliverables {
            let _ = writeln!(out, "- {d}");
        }
        out.push_str("\n**Success Criteria**:\n");
        for c in &m.success_criteria {
            let _ = writeln!(out, "- {c}");
        }
    }
    out
}

pub const GITIGNORE: &str = "# Builds
builds/
*.exe
*.app
*.apk

# Temp files
*.tmp
*.temp
.cache/

# IDE
.vscode/
.idea/
*.suo
*.user

# OS
.DS_Store
Thumbs.db

# Engine specific
.godot/
.import/
Library/
Temp/
Build/

# Logs
*.log
logs/
";

/// Write all four project documents and return their paths.
pub fn write_project_documents(project_dir: &Path, config: &ProjectConfig) -> Result<Vec<PathBuf>> {
    let docs = [
        (paths::GDD_FILE, render_gdd(config)),
        (paths::SOURCE_README_FILE, render_source_readme(config)),
        (paths::TIMELINE_FILE, render_timeline(config)),
        (paths::GITIGNORE_FILE, GITIGNORE.to_string()),
    ];
    let mut written = Vec::with_capacity(docs.len());
    for (rel, body) in docs {
        let path = project_dir.join(rel);
        atomic_write(&path, body.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}
