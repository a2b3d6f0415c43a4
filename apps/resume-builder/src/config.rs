use std::path::PathBuf;

use crate::toolchain::DEFAULT_LATEXMK;

/// Process configuration loaded from environment variables (and `.env` if present).
/// Everything has a default; command-line flags override these values.
#[derive(Debug, Clone)]
pub struct Config {
    pub latexmk: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            latexmk: lookup("RESUME_LATEXMK")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LATEXMK)),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}
