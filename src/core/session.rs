use crate::core::registry::UserRegistry;
use crate::core::snapshot;
use crate::domain::model::{LoadSummary, User};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{RegistryError, Result};

/// Owns the in-memory registry and performs save, load and export against
/// a storage backend. Holds no console state.
pub struct UserSession<S: Storage, C: ConfigProvider> {
    registry: UserRegistry,
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UserSession<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            registry: UserRegistry::new(),
            storage,
            config,
        }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    pub fn users(&self) -> &[User] {
        self.registry.users()
    }

    pub fn is_dirty(&self) -> bool {
        self.registry.is_dirty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.registry.contains(identifier)
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_user(&mut self, user: User) -> Result<()> {
        tracing::debug!("Adding user {}", user.identifier());
        self.registry.add(user)
    }

    pub fn delete_user(&mut self, identifier: &str) -> usize {
        let removed = self.registry.remove(identifier);
        tracing::debug!("Removed {} user(s) matching {}", removed, identifier);
        removed
    }

    pub fn snapshot_exists(&self) -> bool {
        self.storage.exists(self.config.data_file())
    }

    /// 將整個清單寫入二進位快照
    pub fn save(&mut self) -> Result<usize> {
        let path = self.config.data_file();
        let bytes = snapshot::encode(self.registry.users())?;
        self.storage.write_file(path, &bytes)?;
        self.registry.mark_clean();

        tracing::info!(
            "💾 Saved {} user(s) to {} ({} bytes)",
            self.registry.len(),
            path,
            bytes.len()
        );
        Ok(self.registry.len())
    }

    /// 從快照載入並整批取代記憶體中的清單
    pub fn load(&mut self) -> Result<LoadSummary> {
        let path = self.config.data_file();
        if !self.storage.exists(path) {
            return Err(RegistryError::FileNotFound {
                path: path.to_string(),
            });
        }

        let bytes = self.storage.read_file(path)?;
        let snapshot = snapshot::decode(&bytes)?;
        let summary = LoadSummary {
            user_count: snapshot.users.len(),
            saved_at: snapshot.saved_at,
        };
        self.registry.replace_all(snapshot.users);

        tracing::info!(
            "📂 Loaded {} user(s) from {} (saved at {})",
            summary.user_count,
            path,
            summary.saved_at
        );
        Ok(summary)
    }

    /// Writes one rendered line per user. An empty registry writes nothing
    /// and returns `Ok(0)`.
    pub fn export(&self) -> Result<usize> {
        if self.registry.is_empty() {
            return Ok(0);
        }

        let path = self.config.export_file();
        let mut text = String::new();
        for user in self.registry.users() {
            text.push_str(&user.to_string());
            text.push('\n');
        }
        self.storage.write_file(path, text.as_bytes())?;

        tracing::info!("📝 Exported {} user(s) to {}", self.registry.len(), path);
        Ok(self.registry.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }

        fn put_file(&self, path: &str, data: &[u8]) {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
        }
    }

    impl Storage for MockStorage {
        fn exists(&self, path: &str) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                RegistryError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.fail_writes {
                return Err(std::io::Error::other("read-only storage").into());
            }
            self.put_file(path, data);
            Ok(())
        }
    }

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn data_dir(&self) -> &str {
            "."
        }

        fn data_file(&self) -> &str {
            "user.dat"
        }

        fn export_file(&self) -> &str {
            "user.txt"
        }

        fn autoload(&self) -> bool {
            false
        }
    }

    fn user(id: &str) -> User {
        User::new(id, "abcdef", "Calle Real 116", 1998)
    }

    fn session(storage: MockStorage) -> UserSession<MockStorage, TestConfig> {
        UserSession::new(storage, TestConfig)
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let storage = MockStorage::default();
        let mut first = session(storage.clone());
        first.add_user(user("1234a")).unwrap();
        first.add_user(User::new("5678B", "qwerty", "Plaza Mayor 3", 2001)).unwrap();
        assert_eq!(first.save().unwrap(), 2);
        assert!(!first.is_dirty());

        let mut second = session(storage);
        let summary = second.load().unwrap();
        assert_eq!(summary.user_count, 2);
        assert_eq!(second.users(), first.users());
        assert!(!second.is_dirty());
    }

    #[test]
    fn test_load_missing_file_keeps_memory() {
        let mut s = session(MockStorage::default());
        s.add_user(user("1234a")).unwrap();

        let err = s.load().unwrap_err();
        assert!(matches!(err, RegistryError::FileNotFound { .. }));
        assert_eq!(s.users().len(), 1);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_load_corrupt_file_keeps_memory() {
        let storage = MockStorage::default();
        storage.put_file("user.dat", b"garbage bytes");
        let mut s = session(storage);
        s.add_user(user("1234a")).unwrap();

        assert!(s.load().is_err());
        assert_eq!(s.users(), &[user("1234a")]);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_failed_save_keeps_dirty_flag() {
        let storage = MockStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut s = session(storage.clone());
        s.add_user(user("1234a")).unwrap();

        assert!(s.save().is_err());
        assert!(s.is_dirty());
        assert!(storage.get_file("user.dat").is_none());
    }

    #[test]
    fn test_export_writes_lines_and_keeps_dirty() {
        let storage = MockStorage::default();
        let mut s = session(storage.clone());
        s.add_user(user("1234a")).unwrap();
        s.add_user(user("5678b")).unwrap();

        assert_eq!(s.export().unwrap(), 2);
        assert!(s.is_dirty());

        let text = String::from_utf8(storage.get_file("user.txt").unwrap()).unwrap();
        assert_eq!(
            text,
            "Identifier: 1234a | Secret: abcdef | Birth year: 1998 | Address: Calle Real 116\n\
             Identifier: 5678b | Secret: abcdef | Birth year: 1998 | Address: Calle Real 116\n"
        );
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let storage = MockStorage::default();
        storage.put_file("user.txt", b"previous export\n");
        let s = session(storage.clone());

        assert_eq!(s.export().unwrap(), 0);
        assert_eq!(storage.get_file("user.txt").unwrap(), b"previous export\n");
    }

    #[test]
    fn test_delete_then_save_clears_dirty() {
        let mut s = session(MockStorage::default());
        s.add_user(user("1234a")).unwrap();
        s.save().unwrap();

        assert_eq!(s.delete_user("1234A"), 1);
        assert!(s.is_dirty());
        s.save().unwrap();
        assert!(!s.is_dirty());
    }
}
