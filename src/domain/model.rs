use serde::{Deserialize, Serialize};
use std::fmt;

/// One registered user. The identifier cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    identifier: String,
    secret: String,
    address: String,
    birth_year: u16,
}

impl User {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        address: impl Into<String>,
        birth_year: u16,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            address: address.into(),
            birth_year,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn birth_year(&self) -> u16 {
        self.birth_year
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_birth_year(&mut self, birth_year: u16) {
        self.birth_year = birth_year;
    }

    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.identifier.eq_ignore_ascii_case(identifier)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identifier: {} | Secret: {} | Birth year: {} | Address: {}",
            self.identifier, self.secret, self.birth_year, self.address
        )
    }
}

/// Result of a successful snapshot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub user_count: usize,
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let user = User::new("1234a", "abcdef", "Calle Real 116", 1998);
        assert_eq!(
            user.to_string(),
            "Identifier: 1234a | Secret: abcdef | Birth year: 1998 | Address: Calle Real 116"
        );
    }

    #[test]
    fn test_matches_identifier_ignores_case() {
        let user = User::new("1234a", "abcdef", "Calle Real 116", 1998);
        assert!(user.matches_identifier("1234A"));
        assert!(user.matches_identifier("1234a"));
        assert!(!user.matches_identifier("1234b"));
    }

    #[test]
    fn test_setters_keep_identifier() {
        let mut user = User::new("1234a", "abcdef", "Calle Real 116", 1998);
        user.set_secret("zzzzzz");
        user.set_address("Plaza Mayor 1");
        user.set_birth_year(2001);
        assert_eq!(user.identifier(), "1234a");
        assert_eq!(user.secret(), "zzzzzz");
        assert_eq!(user.address(), "Plaza Mayor 1");
        assert_eq!(user.birth_year(), 2001);
    }
}
