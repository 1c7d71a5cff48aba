//! # API Facade
//!
//! [`ClientApi`] is the single entry point for registry operations, whatever UI
//! drives it. It owns the in-memory [`Registry`] and the [`DataStore`] behind it.
//!
//! ## Responsibilities
//!
//! - **Dispatches** to the command modules
//! - **Persists** the registry after every mutating command
//! - **Recovers** from an absent or corrupt store when opening
//!
//! ## Persistence Policy
//!
//! A failed save never fails the operation that triggered it. The mutation
//! stays in memory and the failure is attached to the result as an error
//! message, so memory and disk may diverge until the next successful save.
//!
//! ## Generic Over DataStore
//!
//! - Production: `ClientApi<FileStore>`
//! - Testing: `ClientApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{ClientRecord, Registry};
use crate::store::DataStore;

/// Options that change how [`ClientApi::open`] treats the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    /// Copy a corrupt store aside before starting over.
    pub backup_corrupt: bool,
}

pub struct ClientApi<S: DataStore> {
    store: S,
    registry: Registry,
}

impl<S: DataStore> ClientApi<S> {
    /// Loads the registry from `store`.
    ///
    /// An absent store starts empty. A corrupt or unreadable one, or one whose
    /// ids leave no room for another client, also starts empty, with a warning
    /// in the returned messages; its contents are lost on the next save unless
    /// `options.backup_corrupt` is set.
    pub fn open(mut store: S, options: OpenOptions) -> (Self, Vec<commands::CmdMessage>) {
        let mut messages = Vec::new();
        let loaded = store.load().and_then(|loaded| match loaded {
            Some(mut registry) => {
                if registry.repair_next_id()? {
                    tracing::warn!(
                        next_id = registry.next_id,
                        "stored next_id was behind existing ids, raised it"
                    );
                }
                Ok(Some(registry))
            }
            None => Ok(None),
        });
        let registry = match loaded {
            Ok(Some(registry)) => registry,
            Ok(None) => Registry::new(),
            Err(e) => {
                tracing::warn!(error = %e, "data file is corrupt or unreadable");
                if options.backup_corrupt {
                    match store.backup_corrupt() {
                        Ok(Some(path)) => messages.push(commands::CmdMessage::info(format!(
                            "Previous data copied to {}",
                            path.display()
                        ))),
                        Ok(None) => {}
                        Err(e) => {
                            tracing::error!(error = %e, "could not back up corrupt data file");
                            messages.push(commands::CmdMessage::error(format!(
                                "Could not back up corrupt data file: {}",
                                e
                            )));
                        }
                    }
                }
                messages.insert(
                    0,
                    commands::CmdMessage::warning(
                        "Data file is corrupt or unreadable. Starting a new database.",
                    ),
                );
                Registry::new()
            }
        };
        (Self { store, registry }, messages)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn find_client(&self, id: u64) -> Option<&ClientRecord> {
        self.registry.find(id)
    }

    pub fn create_client(
        &mut self,
        name: &str,
        phone: &str,
        service: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.registry, name, phone, service)?;
        Ok(self.persisted(result))
    }

    pub fn list_clients(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.registry)
    }

    pub fn get_client(&self, id: u64) -> Result<commands::CmdResult> {
        commands::get::run(&self.registry, id)
    }

    pub fn update_client(
        &mut self,
        id: u64,
        update: &commands::ClientUpdate,
    ) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.registry, id, update)?;
        Ok(self.persisted(result))
    }

    pub fn delete_client(&mut self, id: u64) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.registry, id)?;
        Ok(self.persisted(result))
    }

    pub fn search_clients(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.registry, term)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.registry)
    }

    /// Writes the registry out, reporting failure as a message instead of an error.
    pub fn save(&mut self) -> Vec<commands::CmdMessage> {
        match self.store.save(&self.registry) {
            Ok(()) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to save data file");
                vec![commands::CmdMessage::error(format!(
                    "Error saving data: {}",
                    e
                ))]
            }
        }
    }

    fn persisted(&mut self, mut result: commands::CmdResult) -> commands::CmdResult {
        for message in self.save() {
            result.add_message(message);
        }
        result
    }
}

pub use commands::report::{ServiceCount, ServiceReport};
pub use commands::{ClientUpdate, CmdMessage, CmdResult, MessageLevel};
