use serde::{Deserialize, Serialize};

/// Settings for the CLI wrapper. The engine itself is a pure library and
/// reads no environment, so everything here only shapes the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter when RUST_LOG is unset.
    pub log_level: String,
    /// Path to a catalog JSON document; the builtin catalog when empty.
    pub catalog_path: Option<String>,
    /// Emit one-line JSON instead of pretty-printed output.
    pub compact_output: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            log_level: env("LOG_LEVEL", "info"),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
            compact_output: env("OUTPUT_COMPACT", "false").to_lowercase() == "true",
        }
    }
}
