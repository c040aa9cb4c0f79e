use crate::utils::error::Result;

/// Whole-file persistence used by save, load and export.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Replaces the file entirely; on failure the previous contents remain.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn data_file(&self) -> &str;
    fn export_file(&self) -> &str;
    fn autoload(&self) -> bool;
}
