pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_APP_NAME: &str = "phonecatApp";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "phonecat")]
#[command(about = "Fetches the phone catalogue and renders the phone list view")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    #[arg(long, help = "TOML configuration file; overrides --base-url")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn app_name(&self) -> &str {
        DEFAULT_APP_NAME
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)
    }
}
