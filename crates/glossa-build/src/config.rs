use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for glossa.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (GLOSSA_* prefix, highest priority)
/// 2. Config file (~/.config/glossa/config.toml)
/// 3. Built-in defaults (lowest priority)
///
/// The only command-line override is the log level (`-v`/`-q`), applied
/// when the logger is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the README template looked up at the root and in every
    /// directory.
    ///
    /// Can be set via:
    /// - ENV: GLOSSA_README_TEMPLATE
    /// - Config: readme_template = "README-template.txt"
    pub readme_template: String,

    /// Name of the generated README in every directory.
    pub readme_name: String,

    /// Name of the keyword index template at the root.
    pub index_template: String,

    /// Name of the generated keyword index at the root.
    pub index_name: String,

    /// Logger settings for the command line tool.
    pub logging: LoggingConfig,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    pub coloured: bool,
    pub report_caller: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme_template: String::from("README-template.txt"),
            readme_name: String::from("README.md"),
            index_template: String::from("index-template.txt"),
            index_name: String::from("index.md"),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            coloured: true,
            report_caller: false,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/glossa/config.toml
    /// Reads environment variables with GLOSSA_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("glossa");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/glossa/config.toml
/// - macOS: ~/Library/Application Support/glossa/config.toml
/// - Windows: %APPDATA%\glossa\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glossa")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Glossa Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. Environment variables (GLOSSA_* prefix, highest priority)
# 2. This config file
# 3. Built-in defaults (lowest priority)
#
# On the command line, -v/-q override logging.level and nothing else.

# Template copied verbatim into each directory's README when present.
# The root must always have one.
#readme_template = "README-template.txt"

# Generated README written in the root and every directory
#readme_name = "README.md"

# Template that starts the keyword index (root only, required)
#index_template = "index-template.txt"

# Generated keyword index, written in the root
#index_name = "index.md"

[logging]
# trace, debug, info, warn, or error
level = "info"
coloured = true
report_caller = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
