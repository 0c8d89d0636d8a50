use crate::config::ProjectConfig;
use crate::engine::EngineConfig;
use crate::paths;
use crate::types::EngineKind;
use std::fmt::Write;

/// Synthesize `agents/project_orchestrator.md` for a project.
pub fn build_orchestrator_document(config: &ProjectConfig, engine: &EngineConfig) -> String {
    let project = &config.project;
    let engine_name = engine.engine.as_str();
    let folder = paths::sanitize_project_name(&project.name);

    let mut out = String::new();
    let _ = write!(
        out,
        "# Project Orchestrator - {name}\n\n\
         ## Project-Specific Configuration\n\
         - **Engine**: {engine_name} {version}\n\
         - **Platform**: {platform}\n\
         - **Project**: {name}\n\n\
         ## Agent Team for This Project\n",
        name = project.name,
        version = engine.version.as_deref().unwrap_or(""),
        platform = project.platform,
    );

    for role in &config.team.active_agents {
        let _ = writeln!(out, "- **{}** (`agents/{}`)", role.title(), role.filename());
    }

    let _ = write!(
        out,
        "\n## Project-Specific Workflow\n\n\
         ### Current Phase\n\
         **Phase**: {phase}\n\n\
         ### Next Steps\n\
         {next_steps}\n\n\
         ## Engine-Specific Commands\n\n\
         ### {engine_name} Development Commands\n\
         {commands}\n\n",
        phase = project.phase,
        next_steps = next_steps(&project.phase, engine_name),
        commands = engine_commands(engine.kind()),
    );

    out.push_str(
        "## Project File Locations\n\
         - **Project Config**: `project-config.json`\n\
         - **Agents**: `agents/` (project-specific)\n\
         - **Documentation**: `documentation/`\n\
         - **Source**: `source/`\n\n",
    );

    let _ = write!(
        out,
        "## Quick Actions\n\n\
         ### Resume Development\n\
         ```bash\n\
         # Navigate to project\n\
         cd projects/{folder}\n\n\
         # Activate current phase agents\n\
         claude \"Read agents/producer_agent.md and continue development\"\n\
         ```\n\n\
         ### Check Project Status\n\
         ```bash\n\
         claude \"Read project-config.json and provide current status\"\n\
         ```\n\n\
         ### Switch Development Phase\n\
         ```bash\n\
         claude \"Read agents/producer_agent.md and transition to [next-phase]\"\n\
         ```\n\n"
    );

    let _ = write!(
        out,
        "## Troubleshooting\n\n\
         ### Common Issues\n\
         - **Agent Conflicts**: Use project-specific agents in `agents/` folder\n\
         - **Engine Issues**: Check `{config_file}` for best practices\n\
         - **Platform Issues**: Review platform-specific requirements\n\n\
         ### Getting Help\n\
         1. Check project-specific agent documentation\n\
         2. Review engine configuration files\n\
         3. Consult project status in `project-config.json`\n\
         4. Use producer agent for coordination\n",
        config_file = paths::engine_config_filename(engine_name),
    );

    out
}

/// Phase-conditioned next steps. Phases are compared verbatim.
fn next_steps(phase: &str, engine: &str) -> String {
    match phase {
        "Market Analysis" => format!(
            "1. Run market analysis with Market Analyst\n\
             2. Validate market opportunity\n\
             3. Proceed to design phase if approved\n\
             4. Set up {engine} project structure"
        ),
        "Design" => format!(
            "1. Create game design documentation\n\
             2. Establish art direction\n\
             3. Plan {engine}-specific implementation\n\
             4. Validate technical feasibility"
        ),
        "Development" => format!(
            "1. Set up {engine} project\n\
             2. Implement core mechanics\n\
             3. Create art assets\n\
             4. Integrate and test features"
        ),
        _ => "Continue with current phase objectives".to_string(),
    }
}

fn engine_commands(engine: Option<EngineKind>) -> &'static str {
    match engine {
        Some(EngineKind::Godot) => GODOT_COMMANDS,
        Some(EngineKind::Unity) => UNITY_COMMANDS,
        Some(EngineKind::Unreal) => UNREAL_COMMANDS,
        None => "# Engine-specific commands will be added here",
    }
}

const GODOT_COMMANDS: &str = r#"```bash
# Create new Godot project
godot --editor --path ./source

# Run project
godot --path ./source

# Export for platform
godot --export "Platform" ./builds/game.exe --path ./source
```"#;

const UNITY_COMMANDS: &str = r#"```bash
# Open Unity project
unity -projectPath ./source

# Build project (requires Unity installed)
unity -batchmode -quit -projectPath ./source -buildTarget StandaloneWindows64

# Run tests
unity -batchmode -runTests -projectPath ./source
```"#;

const UNREAL_COMMANDS: &str = r#"```bash
# Generate project files
UnrealBuildTool -projectfiles -project="./source/Project.uproject"

# Build project
UnrealBuildTool Development Win64 -project="./source/Project.uproject"

# Package for distribution
RunUAT BuildCookRun -project="./source/Project.uproject" -platform=Win64
```"#;
