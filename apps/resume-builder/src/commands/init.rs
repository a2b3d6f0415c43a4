use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use crate::models::sample::SAMPLE_RESUME;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the sample resume
    #[arg(short, long, default_value = "resume.yml")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.output, SAMPLE_RESUME)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(path = %args.output.display(), "Wrote sample resume");
    println!("Sample resume written to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_sample() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            output: dir.path().join("cv").join("resume.yml"),
            force: false,
        };
        run(&args).unwrap();
        assert_eq!(fs::read_to_string(&args.output).unwrap(), SAMPLE_RESUME);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("resume.yml");
        fs::write(&output, "name: Keep Me\n").unwrap();

        let err = run(&InitArgs {
            output: output.clone(),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "name: Keep Me\n");

        run(&InitArgs {
            output: output.clone(),
            force: true,
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), SAMPLE_RESUME);
    }
}
