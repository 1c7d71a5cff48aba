use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCount {
    pub service: String,
    pub count: usize,
}

/// Client tally, grouped by exact service string in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceReport {
    pub total: usize,
    pub by_service: Vec<ServiceCount>,
}

impl ServiceReport {
    pub fn build(registry: &Registry) -> Self {
        let mut by_service: Vec<ServiceCount> = Vec::new();
        for client in &registry.clients {
            match by_service.iter_mut().find(|s| s.service == client.service) {
                Some(entry) => entry.count += 1,
                None => by_service.push(ServiceCount {
                    service: client.service.clone(),
                    count: 1,
                }),
            }
        }
        Self {
            total: registry.len(),
            by_service,
        }
    }
}

pub fn run(registry: &Registry) -> Result<CmdResult> {
    let report = ServiceReport::build(registry);
    let mut result = CmdResult::default();
    if report.total == 0 {
        result.add_message(CmdMessage::info("No data to report."));
    }
    Ok(result.with_report(report))
}
