use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ClientRecord, Registry};

/// Case-insensitive match on the name, plain substring match on the phone.
pub fn matches(client: &ClientRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    client.name.to_lowercase().contains(&term) || client.phone.contains(&term)
}

pub fn run(registry: &Registry, term: &str) -> Result<CmdResult> {
    let listed: Vec<ClientRecord> = registry
        .clients
        .iter()
        .filter(|c| matches(c, term))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_clients(listed))
}
