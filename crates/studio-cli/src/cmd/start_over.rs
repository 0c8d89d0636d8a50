use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::Path;
use studio_core::lifecycle::{StartOverOutcome, StartOverPlan};

const CONFIRM_WORD: &str = "YES";

pub fn run(root: &Path, project: &str, yes: bool, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let plan = StartOverPlan::prepare(&settings.projects_dir, project)
        .with_context(|| format!("failed to load project '{project}'"))?;

    let confirmed = yes || {
        let stdin = std::io::stdin();
        confirm(&plan, &mut stdin.lock(), &mut std::io::stderr())?
    };

    let outcome = if confirmed {
        plan.confirm(Utc::now())
            .with_context(|| format!("failed to start over project '{project}'"))?
    } else {
        plan.cancel()
    };

    if json {
        return print_json(&outcome);
    }
    match outcome {
        StartOverOutcome::Cancelled { .. } => println!("Operation cancelled."),
        StartOverOutcome::Completed(report) => {
            println!("Project '{}' has been reset.", report.display_name);
            println!("Backup saved to: {}", report.backup_path.display());
            println!("Documents removed: {}", report.removed_documents);
            println!("\nTo restart development: studio resume {}", report.folder);
        }
    }
    Ok(())
}

/// Explain what start-over does and read a confirmation line. Only the exact
/// word `YES` (surrounding whitespace ignored) confirms.
fn confirm(
    plan: &StartOverPlan,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> anyhow::Result<bool> {
    let project = plan.project();
    writeln!(prompt, "START OVER: {}", project.config.project.name)?;
    writeln!(prompt, "This will:")?;
    writeln!(prompt, "- Back up the current project folder")?;
    writeln!(prompt, "- Reset phase, status and version")?;
    writeln!(prompt, "- Delete documentation except *_template.md files")?;
    write!(
        prompt,
        "\nAre you sure you want to start over? (type '{CONFIRM_WORD}' to confirm): "
    )?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim() == CONFIRM_WORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use studio_core::config::{ProjectConfig, ProjectDeclaration};
    use tempfile::TempDir;

    fn plan(dir: &TempDir) -> StartOverPlan {
        let decl = ProjectDeclaration {
            name: "Star Forge".to_string(),
            mode: "design".to_string(),
            ..Default::default()
        };
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cfg = ProjectConfig::new(decl, Vec::new(), created);
        cfg.save(&dir.path().join("star-forge")).unwrap();
        StartOverPlan::prepare(dir.path(), "star-forge").unwrap()
    }

    fn answer(dir: &TempDir, input: &str) -> (bool, String) {
        let mut prompt = Vec::new();
        let ok = confirm(&plan(dir), &mut input.as_bytes(), &mut prompt).unwrap();
        (ok, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn only_exact_yes_confirms() {
        let dir = TempDir::new().unwrap();
        let (ok, prompt) = answer(&dir, "YES\n");
        assert!(ok);
        assert!(prompt.starts_with("START OVER: Star Forge\n"));
        assert!(prompt.ends_with("(type 'YES' to confirm): "));

        for input in ["yes\n", "Y\n", "\n", ""] {
            assert!(!answer(&dir, input).0, "{input:?} should not confirm");
        }
        assert!(answer(&dir, "  YES  \n").0);
    }
}
