//! # Clientbook Architecture
//!
//! Clientbook is a small customer registry for independent service providers:
//! clients (name, phone, contracted service) under an auto-incrementing id,
//! kept in a local JSON file. The interactive menu is one client of a
//! UI-agnostic core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, re-prompting on bad input, tables    │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the registry and the store                          │
//! │  - Saves after every mutation, recovers on open             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create, list, get, update, delete, search, report        │
//! │  - Pure functions over a borrowed Registry                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Ids are unique and never reused, even after a delete.
//! - No stored phone fails [`model::is_valid_phone`].
//! - A failed save never undoes or fails the in-memory change.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI talks to
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `ClientRecord`, `Registry` and the validation rules
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
