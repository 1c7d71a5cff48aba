//! # Commands
//!
//! One module per registry operation. Every command works on a borrowed
//! [`Registry`](crate::model::Registry) and returns a [`CmdResult`]: the clients it
//! touched or listed plus leveled messages for whatever UI is driving it.
//!
//! Commands never persist anything themselves. Saving after a mutation is the
//! API facade's job, which keeps these functions trivially testable.

use crate::model::ClientRecord;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod report;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clients: Vec<ClientRecord>,
    pub listed_clients: Vec<ClientRecord>,
    pub report: Option<report::ServiceReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clients(mut self, clients: Vec<ClientRecord>) -> Self {
        self.affected_clients = clients;
        self
    }

    pub fn with_listed_clients(mut self, clients: Vec<ClientRecord>) -> Self {
        self.listed_clients = clients;
        self
    }

    pub fn with_report(mut self, report: report::ServiceReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// Field changes for an existing client. `None` or blank keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
}

impl ClientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}
