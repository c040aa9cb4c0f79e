use crate::utils::error::{RegistryError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}[A-Za-z]$").expect("identifier pattern compiles"));

static BIRTH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("birth year pattern compiles"));

// 名稱 + 空白 + 門牌號碼，例如 "Calle Los Olivos 42"
// 分隔的空白只接受 ASCII
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ]+[A-Za-zÁÉÍÓÚáéíóúÑñ\- ]*[ \t\n\x0B\x0C\r]+[0-9]+$")
        .expect("address pattern compiles")
});

pub const SECRET_LENGTH: usize = 6;

fn invalid(field_name: &str, value: &str, reason: &str) -> RegistryError {
    RegistryError::ValidationError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Four digits followed by one letter, e.g. `1234a`.
pub fn validate_identifier(value: &str) -> Result<()> {
    if IDENTIFIER_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid(
            "identifier",
            value,
            "the identifier must be 4 digits and 1 letter",
        ))
    }
}

pub fn validate_secret(value: &str) -> Result<()> {
    if value.chars().count() == SECRET_LENGTH {
        Ok(())
    } else {
        Err(invalid("secret", value, "the secret must be exactly 6 characters"))
    }
}

/// Returns the parsed year; `0042` is accepted and yields `42`.
pub fn validate_birth_year(value: &str) -> Result<u16> {
    if !BIRTH_YEAR_RE.is_match(value) {
        return Err(invalid("birth_year", value, "the birth year must be 4 digits"));
    }
    value
        .parse::<u16>()
        .map_err(|e| invalid("birth_year", value, &e.to_string()))
}

pub fn validate_address(value: &str) -> Result<()> {
    if ADDRESS_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid(
            "address",
            value,
            "the address must be a name followed by a street number",
        ))
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistryError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("1234a").is_ok());
        assert!(validate_identifier("0000Z").is_ok());
        assert!(validate_identifier("12a").is_err());
        assert!(validate_identifier("12345").is_err());
        assert!(validate_identifier("1234ab").is_err());
        assert!(validate_identifier("1234ñ").is_err());
        assert!(validate_identifier(" 1234a").is_err());
    }

    #[test]
    fn test_validate_secret_counts_characters() {
        assert!(validate_secret("abcdef").is_ok());
        assert!(validate_secret("ñandú1").is_ok());
        assert!(validate_secret("abcde").is_err());
        assert!(validate_secret("abcdefg").is_err());
    }

    #[test]
    fn test_validate_birth_year() {
        assert_eq!(validate_birth_year("1998").unwrap(), 1998);
        assert_eq!(validate_birth_year("0042").unwrap(), 42);
        assert!(validate_birth_year("98").is_err());
        assert!(validate_birth_year("19a8").is_err());
        assert!(validate_birth_year("١٩٩٨").is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("Calle Real 116").is_ok());
        assert!(validate_address("Calle Real Betis Balompié 116").is_ok());
        assert!(validate_address("Avenida Núñez-Ávila 7").is_ok());
        assert!(validate_address("Calle Real").is_err());
        assert!(validate_address("116").is_err());
        assert!(validate_address("Calle Real116").is_err());
        assert!(validate_address("Calle 3 de Mayo 5").is_err());
    }

    #[test]
    fn test_address_separator_is_ascii_whitespace() {
        assert!(validate_address("Calle Real\t116").is_ok());
        assert!(validate_address("Calle Real\u{00A0}116").is_err());
        assert!(validate_address("Calle Real\u{2003}116").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.data_file", "user.dat").is_ok());
        assert!(validate_path("storage.data_file", "").is_err());
        assert!(validate_path("storage.data_file", "a\0b").is_err());
    }
}
