use crate::domain::model::User;
use crate::utils::error::{RegistryError, Result};

/// Ordered in-memory collection of users plus the unsaved-changes flag.
#[derive(Debug, Default, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
    dirty: bool,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users,
            dirty: false,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.users.iter().any(|u| u.matches_identifier(identifier))
    }

    pub fn add(&mut self, user: User) -> Result<()> {
        if self.contains(user.identifier()) {
            return Err(RegistryError::DuplicateIdentifier {
                identifier: user.identifier().to_string(),
            });
        }
        self.users.push(user);
        self.dirty = true;
        Ok(())
    }

    /// Removes every user whose identifier matches, ignoring case.
    pub fn remove(&mut self, identifier: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|u| !u.matches_identifier(identifier));
        let removed = before - self.users.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
        self.dirty = false;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
