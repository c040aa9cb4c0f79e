use crate::config::{
    validate_storage_paths, DEFAULT_DATA_DIR, DEFAULT_DATA_FILE, DEFAULT_EXPORT_FILE,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-registry")]
#[command(about = "Console manager for a small collection of user records")]
pub struct CliConfig {
    /// Directory holding the data and export files
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    /// Binary snapshot file name
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,

    /// Plain-text export file name
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    pub export_file: String,

    /// Do not load the data file at startup
    #[arg(long)]
    pub no_autoload: bool,

    /// Path to a TOML configuration file (replaces the storage flags)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            no_autoload: false,
            config: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn export_file(&self) -> &str {
        &self.export_file
    }

    fn autoload(&self) -> bool {
        !self.no_autoload
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_storage_paths(&self.data_dir, &self.data_file, &self.export_file)
    }
}
