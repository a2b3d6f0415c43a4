//! Per-request scratch directory for intermediate LaTeX and PDF files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use uuid::Uuid;

use crate::layout::levels::OptimizationLevel;

/// Private temporary directory owned by a single build request.
///
/// Removed when dropped, so it is cleaned up on every exit path, error
/// returns included. Concurrent builds never share a directory.
#[derive(Debug)]
pub struct BuildWorkspace {
    dir: TempDir,
}

impl BuildWorkspace {
    pub fn create(build_id: Uuid) -> std::io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("resume-{build_id}-"))
            .tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the source for one attempt. Each level gets its own file stem,
    /// so every attempt's artifact stays distinct.
    pub fn write_source(&self, level: OptimizationLevel, source: &str) -> std::io::Result<PathBuf> {
        let path = self
            .dir
            .path()
            .join(format!("resume-level{}.tex", level.number()));
        fs::write(&path, source)?;
        Ok(path)
    }
}
