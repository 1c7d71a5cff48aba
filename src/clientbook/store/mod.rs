//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the registry. The whole
//! registry is loaded once at start-up and written back in full after every
//! mutation, so the trait deals in complete [`Registry`] snapshots rather than
//! individual records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One pretty-printed JSON file (`clientes.json` by default)
//!   - Writes go to a sibling temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: Storage for tests
//!   - Keeps the last saved snapshot
//!   - Can be told to fail writes or to report a corrupt store
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "clients": [
//!     { "id": 1, "name": "Ana Souza", "phone": "86988887777", "service": "Manicure" }
//!   ],
//!   "next_id": 2
//! }
//! ```
//!
//! Deciding what to do with an absent or corrupt store is not the store's job:
//! see [`crate::api::ClientApi::open`].

use crate::error::Result;
use crate::model::Registry;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for registry persistence.
pub trait DataStore {
    /// Read the persisted registry. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Registry>>;

    /// Replace the persisted registry with `registry`.
    fn save(&mut self, registry: &Registry) -> Result<()>;

    /// Copy an unreadable store aside so a later save does not destroy it.
    /// Returns the backup location, or `None` if there was nothing to copy.
    fn backup_corrupt(&mut self) -> Result<Option<PathBuf>>;
}
