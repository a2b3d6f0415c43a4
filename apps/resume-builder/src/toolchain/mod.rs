//! External toolchain seam for LaTeX compilation and PDF page counting.
//!
//! The build controller only talks to the `Toolchain` trait, so the one-page
//! search can be driven in tests by a fake that never spawns a process.
//! `LatexToolchain` is the real thing: latexmk for compilation, lopdf for counting.

pub mod latexmk;
pub mod pages;

use std::path::{Path, PathBuf};

use crate::errors::{CompileError, PageCountError};

pub use latexmk::{Latexmk, DEFAULT_LATEXMK};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait Toolchain {
    /// Compiles `source` inside `work_dir` and returns the path of the produced PDF.
    fn compile(&self, source: &Path, work_dir: &Path) -> Result<PathBuf, CompileError>;

    /// Number of pages in a compiled artifact. Always at least 1 on success.
    fn count_pages(&self, pdf: &Path) -> Result<usize, PageCountError>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn compile(&self, source: &Path, work_dir: &Path) -> Result<PathBuf, CompileError> {
        (**self).compile(source, work_dir)
    }

    fn count_pages(&self, pdf: &Path) -> Result<usize, PageCountError> {
        (**self).count_pages(pdf)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Default implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct LatexToolchain {
    compiler: Latexmk,
}

impl LatexToolchain {
    pub fn new(compiler: Latexmk) -> Self {
        Self { compiler }
    }
}

impl Toolchain for LatexToolchain {
    fn compile(&self, source: &Path, work_dir: &Path) -> Result<PathBuf, CompileError> {
        self.compiler.compile(source, work_dir)
    }

    fn count_pages(&self, pdf: &Path) -> Result<usize, PageCountError> {
        pages::count_pages(pdf)
    }
}
