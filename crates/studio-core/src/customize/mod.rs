//! Project-specific agent documents.
//!
//! `customize` is a pure function of its inputs: the same base text, engine
//! config and project config always produce byte-identical output. All file
//! access lives in `customize_agents_for_project`.

pub mod blocks;
pub mod orchestrator;

pub use orchestrator::build_orchestrator_document;

use crate::config::ProjectConfig;
use crate::engine::EngineConfig;
use crate::error::{Result, StudioError};
use crate::io::{atomic_write, ensure_dir};
use crate::paths;
use crate::settings::StudioSettings;
use crate::types::Role;
use blocks::BlockContext;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Guidance is inserted immediately before the first occurrence of this
/// heading.
pub const ANCHOR: &str = "## Core Responsibilities";

// ---------------------------------------------------------------------------
// Pure customization
// ---------------------------------------------------------------------------

pub fn customize(
    role: Role,
    base_text: &str,
    engine: &EngineConfig,
    config: &ProjectConfig,
) -> String {
    let header = project_header(role, engine, config);
    let guidelines = engine_guidelines(role, engine, &config.project.platform);

    let mut content = if base_text.contains(ANCHOR) {
        base_text.replacen(
            ANCHOR,
            &format!("{header}## Engine-Specific Guidelines\n{guidelines}\n\n{ANCHOR}"),
            1,
        )
    } else {
        tracing::debug!(role = %role, "no anchor in base template, prepending guidance");
        format!("{header}{guidelines}\n\n{base_text}")
    };

    if let Some(kind) = engine.kind() {
        let ctx = BlockContext {
            engine_name: &engine.engine,
            engine: kind,
            platform: &config.project.platform,
        };
        if let Some(block) = blocks::role_block(role, &ctx) {
            content = insert_block(&content, &block);
        }
    }

    content
}

fn insert_block(content: &str, block: &str) -> String {
    if content.contains(ANCHOR) {
        content.replacen(ANCHOR, &format!("{block}\n{ANCHOR}"), 1)
    } else {
        format!("{block}\n{content}")
    }
}

fn project_header(role: Role, engine: &EngineConfig, config: &ProjectConfig) -> String {
    let project = &config.project;
    format!(
        "# {title} - {name}\n\n\
         ## Project Configuration\n\
         - **Engine**: {engine} {version}\n\
         - **Platform**: {platform}\n\
         - **Genre**: {genre}\n\
         - **Project**: {name}\n\n\
         ---\n\n",
        title = role.title(),
        name = project.name,
        engine = engine.engine,
        version = engine.version.as_deref().unwrap_or(""),
        platform = project.platform,
        genre = project.genre,
    )
}

fn engine_guidelines(role: Role, engine: &EngineConfig, platform: &str) -> String {
    let name = &engine.engine;
    let mut section = format!(
        "### {name} Best Practices\n\n\
         **Engine Version**: {}\n\
         **Target Platform**: {platform}\n\n",
        engine.version.as_deref().unwrap_or("Latest"),
    );

    if let Some(specialization) = engine.specialization(role.as_str()) {
        let _ = writeln!(section, "**Your {name} Focus Areas:**");
        for area in &specialization.focus {
            let _ = writeln!(section, "- {area}");
        }
        section.push_str("\n**Recommended Tools:**\n");
        for tool in &specialization.tools {
            let _ = writeln!(section, "- {tool}");
        }
    }

    let naming = &engine.best_practices.naming_conventions;
    if !naming.is_empty() {
        let _ = writeln!(section, "\n**{name} Naming Conventions:**");
        for (item, convention) in naming {
            let _ = writeln!(section, "- {}: {convention}", capitalize_words(item));
        }
    }

    section
}

/// Uppercase the first letter of each alphabetic run and lowercase the
/// rest, keeping separators as-is ("node_names" → "Node_Names").
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Project batch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct SkippedRole {
    pub role: String,
    pub reason: String,
}

/// What a customization run wrote.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomizeReport {
    pub engine: String,
    pub written: Vec<Role>,
    pub skipped: Vec<SkippedRole>,
    pub orchestrator: PathBuf,
}

/// Customize every active role of `config` into `<project_dir>/agents/` and
/// write the orchestrator document. A role whose base template is missing is
/// logged and skipped; the rest of the batch still runs.
pub fn customize_agents_for_project(
    settings: &StudioSettings,
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<CustomizeReport> {
    let engine = EngineConfig::load(&settings.engine_configs_dir, &config.project.engine)?;
    let agents_dir = paths::project_agents_dir(project_dir);
    ensure_dir(&agents_dir)?;

    let mut report = CustomizeReport {
        engine: engine.engine.clone(),
        ..Default::default()
    };

    for &role in &config.team.active_agents {
        let base = match read_base_template(&settings.agents_dir, role) {
            Ok(text) => text,
            Err(StudioError::TemplateNotFound { role, path }) => {
                tracing::warn!(%role, path = %path.display(), "base template not found, skipping");
                report.skipped.push(SkippedRole {
                    role,
                    reason: format!("base template not found at {}", path.display()),
                });
                continue;
            }
            Err(e) => return Err(e),
        };
        let customized = customize(role, &base, &engine, config);
        atomic_write(&agents_dir.join(role.filename()), customized.as_bytes())?;
        report.written.push(role);
    }

    let orchestrator = agents_dir.join(paths::ORCHESTRATOR_FILE);
    atomic_write(
        &orchestrator,
        build_orchestrator_document(config, &engine).as_bytes(),
    )?;
    report.orchestrator = orchestrator;

    tracing::info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        engine = %report.engine,
        "customized project agents"
    );
    Ok(report)
}

fn read_base_template(agents_dir: &Path, role: Role) -> Result<String> {
    let path = paths::base_template_path(agents_dir, role.as_str());
    if !path.exists() {
        return Err(StudioError::TemplateNotFound {
            role: role.as_str().to_string(),
            path,
        });
    }
    Ok(std::fs::read_to_string(&path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectDeclaration;
    use crate::engine::Specialization;
    use crate::types::EngineKind;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    const BASE: &str = "# Agent\n\nIntro text.\n\n## Core Responsibilities\n- Do the work\n";

    fn config(engine: &str, platform: &str) -> ProjectConfig {
        let decl = ProjectDeclaration {
            name: "Star Forge".to_string(),
            genre: "Action".to_string(),
            platform: platform.to_string(),
            engine: engine.to_string(),
            mode: "development".to_string(),
            timeline: "Short".to_string(),
            ..Default::default()
        };
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ProjectConfig::new(decl, Vec::new(), created)
    }

    fn godot_config() -> EngineConfig {
        let mut engine = EngineConfig::empty("Godot");
        engine.version = Some("4.2".to_string());
        engine
            .best_practices
            .naming_conventions
            .insert("node_names".to_string(), "PascalCase".to_string());
        engine.agent_specializations.insert(
            "mechanics_developer".to_string(),
            Specialization {
                focus: vec!["CharacterBody3D movement".to_string()],
                tools: vec!["GDScript".to_string(), "GUT".to_string()],
            },
        );
        engine
    }

    #[test]
    fn header_and_guidelines_land_before_anchor() {
        let out = customize(Role::ProducerAgent, BASE, &godot_config(), &config("Godot", "PC"));
        assert!(out.starts_with("# Agent\n\nIntro text.\n\n# Producer Agent - Star Forge\n"));
        assert!(out.contains("- **Engine**: Godot 4.2\n"));
        assert!(out.contains("---\n\n## Engine-Specific Guidelines\n### Godot Best Practices\n"));
        assert!(out.contains("**Engine Version**: 4.2\n**Target Platform**: PC\n"));
        assert!(out.contains("**Godot Naming Conventions:**\n- Node_Names: PascalCase\n"));
        assert!(out.ends_with("\n\n## Core Responsibilities\n- Do the work\n"));
        assert_eq!(out.matches(ANCHOR).count(), 1);
    }

    #[test]
    fn engine_names_dispatch_case_insensitively_with_unreal_alias() {
        let cfg = config("Unreal", "PC");
        let full = customize(
            Role::MechanicsDeveloper,
            BASE,
            &EngineConfig::empty("Unreal Engine"),
            &cfg,
        );
        assert!(full.contains("## Unreal Engine-Specific Implementation\n"));
        for alias in ["Unreal", "unreal engine", "UNREAL"] {
            let out = customize(Role::MechanicsDeveloper, BASE, &EngineConfig::empty(alias), &cfg);
            assert!(
                out.contains(&format!("## {alias}-Specific Implementation\n")),
                "no Unreal block for {alias:?}"
            );
            assert!(out.contains("Use **Blueprint and C++**"), "wrong block for {alias:?}");
        }
        let unknown = customize(Role::MechanicsDeveloper, BASE, &EngineConfig::empty("Unreal 5"), &cfg);
        assert!(!unknown.contains("-Specific Implementation"));
    }

    #[test]
    fn specializations_listed_for_matching_role() {
        let engine = godot_config();
        let cfg = config("Godot", "PC");
        let out = customize(Role::MechanicsDeveloper, BASE, &engine, &cfg);
        assert!(out.contains(
            "**Your Godot Focus Areas:**\n- CharacterBody3D movement\n\n**Recommended Tools:**\n- GDScript\n- GUT\n"
        ));
        let other = customize(Role::DataScientist, BASE, &engine, &cfg);
        assert!(!other.contains("Focus Areas"));
    }

    #[test]
    fn missing_version_reads_latest() {
        let out = customize(
            Role::ProducerAgent,
            BASE,
            &EngineConfig::empty("Unity"),
            &config("Unity", "PC"),
        );
        assert!(out.contains("**Engine Version**: Latest\n"));
    }

    #[test]
    fn role_block_sits_between_guidelines_and_anchor() {
        let out = customize(
            Role::MechanicsDeveloper,
            BASE,
            &godot_config(),
            &config("Godot", "PC"),
        );
        let guidelines = out.find("## Engine-Specific Guidelines").unwrap();
        let block = out.find("## Godot-Specific Implementation").unwrap();
        let anchor = out.find(ANCHOR).unwrap();
        assert!(guidelines < block && block < anchor);
    }

    #[test]
    fn without_anchor_everything_is_prepended() {
        let base = "# Agent\n\nNo anchor here.\n";
        let out = customize(
            Role::QaAgent,
            base,
            &EngineConfig::empty("Godot"),
            &config("Godot", "Mobile"),
        );
        assert!(out.starts_with("\n## Godot Testing Framework for Mobile\n"));
        let header = out.find("# Qa Agent - Star Forge").unwrap();
        let original = out.find("# Agent\n\nNo anchor here.").unwrap();
        assert!(header < original);
        assert!(out.ends_with(base));
        assert!(!out.contains("## Engine-Specific Guidelines"));
    }

    #[test]
    fn only_first_anchor_is_used() {
        let base = "## Core Responsibilities\nA\n\n## Core Responsibilities\nB\n";
        let out = customize(
            Role::ProducerAgent,
            base,
            &EngineConfig::empty("Godot"),
            &config("Godot", "PC"),
        );
        assert_eq!(out.matches("# Producer Agent - Star Forge").count(), 1);
        assert!(out.ends_with("## Core Responsibilities\nA\n\n## Core Responsibilities\nB\n"));
    }

    #[test]
    fn unknown_engine_gets_no_role_block() {
        let out = customize(
            Role::MechanicsDeveloper,
            BASE,
            &EngineConfig::empty("TBD"),
            &config("TBD", "PC"),
        );
        assert!(out.contains("### TBD Best Practices"));
        assert!(!out.contains("Specific Implementation"));
    }

    #[test]
    fn output_is_deterministic() {
        let engine = godot_config();
        let cfg = config("Godot", "Console");
        for role in Role::all() {
            assert_eq!(
                customize(*role, BASE, &engine, &cfg),
                customize(*role, BASE, &engine, &cfg)
            );
        }
    }

    #[test]
    fn every_role_names_every_known_engine() {
        for kind in EngineKind::all() {
            let engine = EngineConfig::empty(kind.display_name());
            let cfg = config(kind.project_name(), "PC");
            for role in Role::all() {
                let out = customize(*role, BASE, &engine, &cfg);
                assert!(
                    out.contains(kind.display_name()),
                    "{role} missing {}",
                    kind.display_name()
                );
            }
        }
    }

    #[test]
    fn capitalize_words_keeps_separators() {
        assert_eq!(capitalize_words("scripts"), "Scripts");
        assert_eq!(capitalize_words("node_names"), "Node_Names");
        assert_eq!(capitalize_words("UI elements"), "Ui Elements");
    }

    // -- batch --------------------------------------------------------------

    fn studio(dir: &Path) -> StudioSettings {
        StudioSettings::default().resolved(dir)
    }

    #[test]
    fn batch_writes_agents_and_orchestrator() {
        let dir = TempDir::new().unwrap();
        let settings = studio(dir.path());
        std::fs::create_dir_all(&settings.agents_dir).unwrap();
        let cfg = config("Godot", "PC");
        for role in &cfg.team.active_agents {
            std::fs::write(settings.agents_dir.join(role.filename()), BASE).unwrap();
        }
        let project_dir = dir.path().join("projects/star-forge");

        let report = customize_agents_for_project(&settings, &project_dir, &cfg).unwrap();

        assert_eq!(report.written, cfg.team.active_agents);
        assert!(report.skipped.is_empty());
        assert_eq!(report.engine, "Godot");
        for role in &cfg.team.active_agents {
            let text =
                std::fs::read_to_string(project_dir.join("agents").join(role.filename())).unwrap();
            assert!(text.contains("Godot"));
        }
        assert!(project_dir.join("agents/project_orchestrator.md").is_file());
        // Base templates are untouched.
        let base = std::fs::read_to_string(settings.agents_dir.join("qa_agent.md")).unwrap();
        assert_eq!(base, BASE);
    }

    #[test]
    fn missing_template_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let settings = studio(dir.path());
        std::fs::create_dir_all(&settings.agents_dir).unwrap();
        let cfg = config("Unity", "PC");
        for role in cfg.team.active_agents.iter().filter(|r| **r != Role::QaAgent) {
            std::fs::write(settings.agents_dir.join(role.filename()), BASE).unwrap();
        }
        let project_dir = dir.path().join("projects/star-forge");

        let report = customize_agents_for_project(&settings, &project_dir, &cfg).unwrap();

        assert_eq!(report.written.len(), cfg.team.active_agents.len() - 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].role, "qa_agent");
        assert!(!project_dir.join("agents/qa_agent.md").exists());
        assert!(project_dir.join("agents/project_orchestrator.md").is_file());
    }
}
