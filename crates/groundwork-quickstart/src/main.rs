//! Quickstart CLI: scaffold a new multi-crate workspace.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;

use groundwork_quickstart::{ProjectSpec, Scaffolder};

/// Scaffold a new multi-crate workspace.
#[derive(Parser, Debug)]
#[command(name = "groundwork-quickstart")]
#[command(about = "Generate a multi-crate workspace skeleton")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new workspace.
    New {
        /// Workspace name (lowercase kebab-case).
        name: String,

        /// Member crate names; repeat for several members.
        #[arg(short, long = "member", required = true)]
        members: Vec<String>,

        /// Also generate a `<name>-cli` binary member.
        #[arg(long)]
        bin: bool,

        /// Rust edition for generated manifests.
        #[arg(long, default_value = ProjectSpec::DEFAULT_EDITION)]
        edition: String,

        /// Directory to generate into; defaults to `./<name>`.
        #[arg(long)]
        target_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::New {
            name,
            members,
            bin,
            edition,
            target_dir,
        } => {
            let mut spec = ProjectSpec::new(&name, members)
                .context("invalid project specification")?
                .with_edition(edition);
            if bin {
                spec = spec.with_bin();
            }

            let target = target_dir.unwrap_or_else(|| PathBuf::from(&name));
            let created = Scaffolder::new()
                .generate(&spec, &target)
                .with_context(|| format!("failed to scaffold {}", target.display()))?;

            println!("Created {} files under {}", created.len(), target.display());
            Ok(())
        }
    }
}
