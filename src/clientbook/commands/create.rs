use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_phone, validate_required, ClientRecord, Registry};

pub fn run(registry: &mut Registry, name: &str, phone: &str, service: &str) -> Result<CmdResult> {
    // Validate everything before touching the counter
    let name = validate_required("name", name)?;
    let phone = validate_phone(phone)?;
    let service = validate_required("service", service)?;

    let client = ClientRecord {
        id: registry.allocate_id()?,
        name,
        phone,
        service,
    };
    registry.clients.push(client.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client registered successfully! [ID: {}]",
        client.id
    )));
    Ok(result.with_affected_clients(vec![client]))
}
