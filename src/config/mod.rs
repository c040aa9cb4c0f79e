#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::validate_path;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_DATA_FILE: &str = "user.dat";
pub const DEFAULT_EXPORT_FILE: &str = "user.txt";

/// 檢查儲存路徑設定
pub fn validate_storage_paths(data_dir: &str, data_file: &str, export_file: &str) -> Result<()> {
    validate_path("storage.data_dir", data_dir)?;
    validate_path("storage.data_file", data_file)?;
    validate_path("storage.export_file", export_file)?;

    if data_file == export_file {
        return Err(RegistryError::ConfigError {
            message: format!(
                "data file and export file must differ (both are '{}')",
                data_file
            ),
        });
    }

    Ok(())
}
