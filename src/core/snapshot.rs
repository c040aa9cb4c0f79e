//! Binary snapshot of the whole user collection.
//!
//! Layout: 4-byte magic `USRS`, little-endian `u16` format version, then a
//! bincode (standard config) body holding the save time and the users in
//! collection order.

use crate::domain::model::User;
use crate::utils::error::{RegistryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAGIC: &[u8; 4] = b"USRS";
pub const FORMAT_VERSION: u16 = 1;
const HEADER_LEN: usize = MAGIC.len() + 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub saved_at: DateTime<Utc>,
    pub users: Vec<User>,
}

pub fn encode(users: &[User]) -> Result<Vec<u8>> {
    let snapshot = Snapshot {
        saved_at: Utc::now(),
        users: users.to_vec(),
    };
    encode_snapshot(&snapshot)
}

pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let body = bincode::serde::encode_to_vec(snapshot, bincode::config::standard())?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<Snapshot> {
    if bytes.len() < HEADER_LEN {
        return Err(format_error(format!(
            "file is too short ({} bytes)",
            bytes.len()
        )));
    }

    let (magic, rest) = bytes.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(format_error("not a user snapshot (bad magic)".to_string()));
    }

    let (version, body) = rest.split_at(2);
    let version = u16::from_le_bytes([version[0], version[1]]);
    if version != FORMAT_VERSION {
        return Err(format_error(format!(
            "unsupported snapshot version {} (expected {})",
            version, FORMAT_VERSION
        )));
    }

    let (snapshot, consumed): (Snapshot, usize) =
        bincode::serde::decode_from_slice(body, bincode::config::standard())?;
    if consumed != body.len() {
        return Err(format_error(format!(
            "{} trailing bytes after snapshot body",
            body.len() - consumed
        )));
    }

    Ok(snapshot)
}

fn format_error(message: String) -> RegistryError {
    RegistryError::SnapshotFormatError { message }
}
