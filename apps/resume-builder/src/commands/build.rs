use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::layout::optimizer::{BuildController, BuildOptions, BuildOutcome};
use crate::models::resume::load_resume;
use crate::toolchain::{LatexToolchain, Latexmk, Toolchain};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Resume description (YAML)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "resume.pdf")]
    pub output: PathBuf,

    /// Shrink spacing, font and margins step by step until the resume fits on one page
    #[arg(long)]
    pub one_page: bool,

    /// Also write the rendered LaTeX source next to the output
    #[arg(long)]
    pub debug: bool,

    /// latexmk executable
    #[arg(long, env = "RESUME_LATEXMK")]
    pub latexmk: Option<PathBuf>,

    /// Print the build outcome as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &BuildArgs, config: &Config) -> Result<()> {
    let program = args.latexmk.clone().unwrap_or_else(|| config.latexmk.clone());
    let toolchain = LatexToolchain::new(Latexmk::new(program));
    let outcome = execute(args, toolchain)?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize build outcome")?;
        println!("{json}");
    } else {
        print_summary(&outcome, args.one_page);
    }
    Ok(())
}

fn execute<T: Toolchain>(args: &BuildArgs, toolchain: T) -> Result<BuildOutcome> {
    let loaded = load_resume(&args.input)?;
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }

    let options = BuildOptions {
        output: args.output.clone(),
        one_page: args.one_page,
        debug: args.debug,
    };
    info!(input = %args.input.display(), one_page = options.one_page, "Building resume");

    BuildController::new(toolchain)
        .build(&loaded.data, &options)
        .with_context(|| format!("Failed to build {}", args.input.display()))
}

fn print_summary(outcome: &BuildOutcome, one_page: bool) {
    println!("Successfully built resume: {}", outcome.output_path.display());
    if one_page {
        if outcome.fit_achieved {
            println!("Fits on one page using {}", outcome.level);
        } else {
            let pages = outcome
                .page_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string());
            println!("Could not fit on one page; kept the unoptimized layout ({pages} pages)");
        }
    }
    if let Some(source) = &outcome.source_path {
        println!("LaTeX source: {}", source.display());
    }
}
