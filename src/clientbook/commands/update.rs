use crate::commands::{ClientUpdate, CmdMessage, CmdResult};
use crate::error::{ClientbookError, Result};
use crate::model::{validate_phone, validate_required, Registry};

/// Treats blank input the same as an absent field.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn run(registry: &mut Registry, id: u64, update: &ClientUpdate) -> Result<CmdResult> {
    // Validate every field first so a bad phone never leaves a half-applied edit
    let name = provided(&update.name)
        .map(|v| validate_required("name", v))
        .transpose()?;
    let phone = provided(&update.phone).map(validate_phone).transpose()?;
    let service = provided(&update.service)
        .map(|v| validate_required("service", v))
        .transpose()?;

    let client = registry
        .find_mut(id)
        .ok_or(ClientbookError::ClientNotFound(id))?;

    if let Some(name) = name {
        client.name = name;
    }
    if let Some(phone) = phone {
        client.phone = phone;
    }
    if let Some(service) = service {
        client.service = service;
    }

    let updated = client.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client updated successfully ({}): {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_clients(vec![updated]))
}
