//! Compiler Invoker: runs latexmk on a source file and reports the artifact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::errors::CompileError;

pub const DEFAULT_LATEXMK: &str = "latexmk";

#[derive(Debug, Clone)]
pub struct Latexmk {
    program: PathBuf,
}

impl Default for Latexmk {
    fn default() -> Self {
        Self::new(DEFAULT_LATEXMK)
    }
}

impl Latexmk {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs one compilation. The artifact is `<work_dir>/<source stem>.pdf`.
    ///
    /// A non-zero exit is a failure even if a (partial) PDF was written.
    pub fn compile(&self, source: &Path, work_dir: &Path) -> Result<PathBuf, CompileError> {
        debug!(program = %self.program.display(), source = %source.display(), "Running latexmk");

        let output = Command::new(&self.program)
            .args(command_args(source, work_dir))
            .current_dir(work_dir)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => CompileError::ToolchainMissing {
                    program: self.program.display().to_string(),
                },
                _ => CompileError::Io(err),
            })?;

        if !output.status.success() {
            warn!(status = ?output.status.code(), "latexmk exited with failure");
            return Err(CompileError::Failed {
                status: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let artifact = artifact_path(source, work_dir);
        if !artifact.is_file() {
            return Err(CompileError::MissingArtifact { path: artifact });
        }
        debug!(artifact = %artifact.display(), "latexmk finished");
        Ok(artifact)
    }
}

/// `-pdf -interaction=nonstopmode -output-directory=<dir> <source>`
fn command_args(source: &Path, work_dir: &Path) -> Vec<String> {
    vec![
        "-pdf".to_string(),
        "-interaction=nonstopmode".to_string(),
        format!("-output-directory={}", work_dir.display()),
        source.display().to_string(),
    ]
}

fn artifact_path(source: &Path, work_dir: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    work_dir.join(format!("{}.pdf", stem.to_string_lossy()))
}
