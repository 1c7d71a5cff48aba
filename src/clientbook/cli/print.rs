use clientbook::api::{CmdMessage, MessageLevel, ServiceReport};
use clientbook::model::ClientRecord;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 25;
const PHONE_WIDTH: usize = 15;
const RULE_WIDTH: usize = 60;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn render_client_table(clients: &[ClientRecord]) -> String {
    if clients.is_empty() {
        return "No clients registered.\n".to_string();
    }

    let mut table = format!(
        "{} | {} | {} | {}\n",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Phone", PHONE_WIDTH),
        "Service"
    );
    table.push_str(&"-".repeat(RULE_WIDTH));
    table.push('\n');
    for client in clients {
        table.push_str(&format!(
            "{} | {} | {} | {}\n",
            pad(&client.id.to_string(), ID_WIDTH),
            pad(&client.name, NAME_WIDTH),
            pad(&client.phone, PHONE_WIDTH),
            client.service
        ));
    }
    table
}

pub(super) fn render_search_results(clients: &[ClientRecord]) -> String {
    let mut text = format!("{} client(s) found:\n", clients.len());
    for client in clients {
        text.push_str(&format!(
            "ID: {} | {} | Tel: {} | {}\n",
            client.id, client.name, client.phone, client.service
        ));
    }
    text
}

pub(super) fn render_report(report: &ServiceReport) -> String {
    if report.total == 0 {
        return "No data to report.\n".to_string();
    }

    let mut text = format!("Total clients: {}\n\nBreakdown by service:\n", report.total);
    for entry in &report.by_service {
        text.push_str(&format!("- {}: {} client(s)\n", entry.service, entry.count));
    }
    text
}

/// Left-aligns `s` in a column of `width` terminal cells. Longer values are not cut.
fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
