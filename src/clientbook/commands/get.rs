use crate::commands::CmdResult;
use crate::error::{ClientbookError, Result};
use crate::model::Registry;

/// Looks up a single client by id.
pub fn run(registry: &Registry, id: u64) -> Result<CmdResult> {
    let client = registry
        .find(id)
        .cloned()
        .ok_or(ClientbookError::ClientNotFound(id))?;
    Ok(CmdResult::default().with_listed_clients(vec![client]))
}
