pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::console::Console;
pub use config::toml_config::TomlConfig;
pub use crate::core::{registry::UserRegistry, session::UserSession};
pub use domain::model::User;
pub use utils::error::{RegistryError, Result};
