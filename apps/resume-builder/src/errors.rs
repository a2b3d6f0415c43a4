use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or parsing the resume description.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Cannot read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid resume document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The only render failure: identity fields the heading cannot do without.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Resume is missing the required 'name' field")]
    MissingName,
}

/// Failures reported by the Compiler Invoker.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(
        "LaTeX/latexmk not found ('{program}' could not be started). \
         Install a TeX distribution that ships latexmk (TeX Live, MacTeX or MiKTeX) \
         or point RESUME_LATEXMK at the executable"
    )]
    ToolchainMissing { program: String },

    #[error("LaTeX compilation failed (exit status {status:?})\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}")]
    Failed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("LaTeX compilation reported success but produced no PDF at {path}")]
    MissingArtifact { path: PathBuf },

    #[error("Could not run the LaTeX toolchain: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the Page Counter.
#[derive(Debug, Error)]
pub enum PageCountError {
    #[error("Cannot read PDF {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("PDF {path} contains no pages")]
    NoPages { path: PathBuf },
}

/// Top-level error returned by a build request.
///
/// Inside the one-page search every variant except a baseline failure is absorbed;
/// whatever reaches the caller is fatal and carries the full diagnostic text.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Page count error: {0}")]
    PageCount(#[from] PageCountError),

    #[error("IO error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        BuildError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Non-fatal finding about the input document (unknown keys, wrongly typed entries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Where the finding was made, e.g. `root`, `contact`, `experience[1]`.
    pub location: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}
