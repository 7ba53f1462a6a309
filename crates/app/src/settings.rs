//! Settings for the shell.
//!
//! Sources, lowest precedence first: the TOML file, `EXPENSE_TRACKER_*`
//! environment variables, command-line flags.

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tracker.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level for this binary and the engine.
    pub level: String,
    /// Accounts available in the in-memory directory at startup.
    pub accounts: Vec<SeedAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            accounts: Vec::new(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override log level (error, warn, info, debug, trace).
    #[arg(long, env = "EXPENSE_TRACKER_LEVEL")]
    level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings: AppConfig = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("EXPENSE_TRACKER"))
        .build()?
        .try_deserialize()?;

    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}
