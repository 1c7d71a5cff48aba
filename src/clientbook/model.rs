use crate::error::{ClientbookError, Result};
use serde::{Deserialize, Serialize};

/// Minimum phone length: area code plus subscriber number.
pub const MIN_PHONE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub service: String,
}

/// The full persisted state: every client in insertion order plus the id counter.
///
/// `next_id` never decreases, so ids of deleted clients are never handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    #[serde(default = "default_next_id")]
    pub next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            clients: Vec::new(),
            next_id: default_next_id(),
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn find(&self, id: u64) -> Option<&ClientRecord> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut ClientRecord> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    /// Hands out the current counter value and advances it.
    ///
    /// The counter is left untouched when it cannot advance.
    pub fn allocate_id(&mut self) -> Result<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(ClientbookError::IdSpaceExhausted(id))?;
        Ok(id)
    }

    /// Raises `next_id` above every stored id. Returns true if it had to move.
    ///
    /// Files written by this program never need it; hand-edited ones might.
    /// Fails when a stored id leaves no room above it.
    pub fn repair_next_id(&mut self) -> Result<bool> {
        let max_id = self.clients.iter().map(|c| c.id).max().unwrap_or(0);
        let floor = max_id
            .checked_add(1)
            .ok_or(ClientbookError::IdSpaceExhausted(max_id))?;
        if self.next_id < floor {
            self.next_id = floor;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() >= MIN_PHONE_LEN && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_phone(phone: &str) -> Result<String> {
    let phone = phone.trim();
    if is_valid_phone(phone) {
        Ok(phone.to_string())
    } else {
        Err(ClientbookError::InvalidPhone(phone.to_string()))
    }
}

pub fn validate_required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(ClientbookError::EmptyField(field))
    } else {
        Ok(value.to_string())
    }
}

/// Parses a user-typed client id.
pub fn parse_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ClientbookError::InvalidId(trimmed.to_string()))
}
