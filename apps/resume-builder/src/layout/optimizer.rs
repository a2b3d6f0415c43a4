//! Build controller: the progressive one-page search.
//!
//! A build renders and compiles the baseline (level 0). Without `one_page` that is
//! the result. With it, the baseline's page count is checked and, if it overflows,
//! levels 1..=5 are tried in strict order until one compiles to exactly one page.
//! A level that fails to render, compile or count is skipped; only a baseline
//! failure reaches the caller. When nothing fits, the retained baseline artifact
//! is published with `fit_achieved = false`.
//!
//! Attempts run strictly one after another inside a request-local workspace that
//! is removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::errors::BuildError;
use crate::layout::levels::OptimizationLevel;
use crate::models::resume::ResumeData;
use crate::render::template::{render, DocumentSource};
use crate::toolchain::Toolchain;
use crate::workspace::BuildWorkspace;

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Where the final PDF is written. Missing parent directories are created.
    pub output: PathBuf,
    /// Search for a configuration that fits on a single page.
    pub one_page: bool,
    /// Also write the winning LaTeX source next to the output.
    pub debug: bool,
}

/// Record of one level attempt, kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildAttempt {
    pub level: OptimizationLevel,
    /// `None` when counting was not requested or the attempt failed first.
    pub page_count: Option<usize>,
    /// Why the level did not qualify, if it failed.
    pub error: Option<String>,
}

/// Result of one build. Equal inputs and toolchain behavior give equal outcomes;
/// the per-request build id only appears in the tracing span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildOutcome {
    pub output_path: PathBuf,
    pub level: OptimizationLevel,
    /// True only when a one-page fit was requested and found.
    pub fit_achieved: bool,
    pub page_count: Option<usize>,
    pub attempts: Vec<BuildAttempt>,
    /// Rendered source written in debug mode.
    pub source_path: Option<PathBuf>,
}

/// A successful attempt. Lives only for the duration of one request.
struct CompiledAttempt {
    level: OptimizationLevel,
    source: DocumentSource,
    pdf: PathBuf,
    page_count: Option<usize>,
}

impl CompiledAttempt {
    fn fits(&self) -> bool {
        self.page_count == Some(1)
    }

    fn report(&self) -> BuildAttempt {
        BuildAttempt {
            level: self.level,
            page_count: self.page_count,
            error: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

/// Drives render → compile → count cycles against an injected toolchain.
///
/// Holds no per-build state, so one controller can serve any number of requests.
#[derive(Debug)]
pub struct BuildController<T: Toolchain> {
    toolchain: T,
}

impl<T: Toolchain> BuildController<T> {
    pub fn new(toolchain: T) -> Self {
        Self { toolchain }
    }

    pub fn build(&self, data: &ResumeData, options: &BuildOptions) -> Result<BuildOutcome, BuildError> {
        let build_id = Uuid::new_v4();
        let span = info_span!("build", %build_id);
        let _guard = span.enter();

        let workspace = BuildWorkspace::create(build_id)
            .map_err(|e| BuildError::io("creating build workspace", e))?;
        debug!(workspace = %workspace.path().display(), "Acquired build workspace");

        let mut attempts = Vec::new();

        // Level 0 errors are fatal: there is nothing below it to fall back to.
        let baseline = self.attempt(&workspace, data, OptimizationLevel::Baseline, options.one_page)?;
        attempts.push(baseline.report());

        let winner = if !options.one_page {
            baseline
        } else if baseline.fits() {
            info!("Baseline already fits on one page");
            baseline
        } else {
            info!(
                pages = ?baseline.page_count,
                "Baseline overflows, starting one-page search"
            );
            match self.search(&workspace, data, &mut attempts) {
                Some(found) => found,
                None => {
                    warn!("No optimization level fits on one page, falling back to baseline");
                    baseline
                }
            }
        };

        let outcome = self.publish(winner, attempts, options)?;
        info!(
            level = %outcome.level,
            fit_achieved = outcome.fit_achieved,
            output = %outcome.output_path.display(),
            "Build finished"
        );
        Ok(outcome)
    }

    /// Tries levels 1..=5 in order, stopping at the first one-page fit.
    fn search(
        &self,
        workspace: &BuildWorkspace,
        data: &ResumeData,
        attempts: &mut Vec<BuildAttempt>,
    ) -> Option<CompiledAttempt> {
        for level in OptimizationLevel::SEARCH_ORDER {
            match self.attempt(workspace, data, level, true) {
                Ok(compiled) => {
                    attempts.push(compiled.report());
                    if compiled.fits() {
                        info!(%level, "Fits on one page");
                        return Some(compiled);
                    }
                    debug!(%level, pages = ?compiled.page_count, "Still overflows");
                }
                Err(err) => {
                    warn!(%level, error = %err, "Level disqualified");
                    attempts.push(BuildAttempt {
                        level,
                        page_count: None,
                        error: Some(err.to_string()),
                    });
                }
            }
        }
        None
    }

    /// One atomic render → compile → (count) cycle for a single level.
    fn attempt(
        &self,
        workspace: &BuildWorkspace,
        data: &ResumeData,
        level: OptimizationLevel,
        count: bool,
    ) -> Result<CompiledAttempt, BuildError> {
        let style = level.style();
        debug_assert!(style.within_floors(), "{level} breaks the margin or font floor");
        debug!(
            %level,
            font_size_pt = style.font_size_pt,
            compact_font = style.font.is_compact(),
            min_margin_in = style.margins.min_inches(),
            "Attempting"
        );
        let source = render(data, style)?;
        let source_path = workspace
            .write_source(level, source.as_str())
            .map_err(|e| BuildError::io(format!("writing source for {level}"), e))?;
        let pdf = self.toolchain.compile(&source_path, workspace.path())?;
        let page_count = if count {
            Some(self.toolchain.count_pages(&pdf)?)
        } else {
            None
        };
        Ok(CompiledAttempt {
            level,
            source,
            pdf,
            page_count,
        })
    }

    /// Copies the chosen artifact to the output path, plus the source in debug mode.
    fn publish(
        &self,
        winner: CompiledAttempt,
        attempts: Vec<BuildAttempt>,
        options: &BuildOptions,
    ) -> Result<BuildOutcome, BuildError> {
        let output = &options.output;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| BuildError::io(format!("creating {}", parent.display()), e))?;
        }
        fs::copy(&winner.pdf, output)
            .map_err(|e| BuildError::io(format!("writing {}", output.display()), e))?;

        let source_path = if options.debug {
            let path = debug_source_path(output);
            fs::write(&path, winner.source.as_str())
                .map_err(|e| BuildError::io(format!("writing {}", path.display()), e))?;
            info!(source = %path.display(), "Wrote rendered LaTeX source");
            Some(path)
        } else {
            None
        };

        Ok(BuildOutcome {
            output_path: output.clone(),
            level: winner.level,
            fit_achieved: options.one_page && winner.fits(),
            page_count: winner.page_count,
            attempts,
            source_path,
        })
    }
}

/// `out.pdf` → `out.tex`; an output that is itself `.tex` gets `out.rendered.tex`.
pub fn debug_source_path(output: &Path) -> PathBuf {
    let is_tex = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tex"));
    if is_tex {
        output.with_extension("rendered.tex")
    } else {
        output.with_extension("tex")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
