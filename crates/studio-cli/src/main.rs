mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::create::CreateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "studio",
    about = "Scaffold and manage game studio projects and their agent teams",
    version,
    propagate_version = true
)]
struct Cli {
    /// Studio root (default: auto-detect from studio.yaml or .git/)
    #[arg(long, global = true, env = "STUDIO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project: folders, config, documents and customized agents
    Create(CreateArgs),

    /// Show all projects, or one project in detail
    Status {
        /// Folder or display name
        project: Option<String>,
    },

    /// Mark a project active again
    Resume { project: String },

    /// Freeze a project
    Freeze {
        project: String,

        /// Why the project is being frozen
        #[arg(long)]
        reason: Option<String>,
    },

    /// Back up a project and reset it to its initial phase
    StartOver {
        project: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Regenerate a project's agents from its current config
    Customize { project: String },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Create(args) => cmd::create::run(&root, args, cli.json),
        Commands::Status { project } => cmd::status::run(&root, project.as_deref(), cli.json),
        Commands::Resume { project } => cmd::resume::run(&root, &project, cli.json),
        Commands::Freeze { project, reason } => {
            cmd::freeze::run(&root, &project, reason.as_deref(), cli.json)
        }
        Commands::StartOver { project, yes } => {
            cmd::start_over::run(&root, &project, yes, cli.json)
        }
        Commands::Customize { project } => cmd::customize::run(&root, &project, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
