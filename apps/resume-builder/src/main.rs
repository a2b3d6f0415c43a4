mod commands;
mod config;
mod errors;
mod layout;
mod models;
mod render;
mod toolchain;
mod workspace;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::build::BuildArgs;
use crate::commands::init::InitArgs;
use crate::config::Config;

/// Build a LaTeX resume from YAML, optionally squeezed onto a single page
#[derive(Debug, Parser)]
#[command(name = "resume-builder", version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a sample resume description to start from
    Init(InitArgs),
    /// Render and compile a resume description to PDF
    Build(BuildArgs),
}

fn main() -> Result<()> {
    // Load configuration first so .env values are visible to clap's env fallbacks
    let config = Config::from_env();
    let cli = Cli::parse();

    // Initialize structured logging on stderr (stdout is reserved for --json)
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("resume_builder={}", config.rust_log))),
        1 => EnvFilter::new("resume_builder=debug"),
        _ => EnvFilter::new("resume_builder=trace"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(?config, "resume-builder v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Build(args) => commands::build::run(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_build_flags() {
        let cli = Cli::try_parse_from([
            "resume-builder",
            "-vv",
            "build",
            "--input",
            "cv.yml",
            "--output",
            "out/cv.pdf",
            "--one-page",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.input, std::path::PathBuf::from("cv.yml"));
                assert_eq!(args.output, std::path::PathBuf::from("out/cv.pdf"));
                assert!(args.one_page);
                assert!(args.debug);
                assert!(!args.json);
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["resume-builder", "init"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, std::path::PathBuf::from("resume.yml"));
                assert!(!args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn test_build_requires_input() {
        assert!(Cli::try_parse_from(["resume-builder", "build"]).is_err());
    }
}
