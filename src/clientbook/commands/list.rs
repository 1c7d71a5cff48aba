use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Registry;

pub fn run(registry: &Registry) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_clients(registry.clients.clone()))
}
