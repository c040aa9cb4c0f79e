pub mod registry;
pub mod session;
pub mod snapshot;

pub use crate::domain::model::{LoadSummary, User};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
