//! Stdin command parsing for headless mode

use ntmapper_app::{ActiveView, Message};
use ntmapper_core::prelude::*;

/// One line of headless input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Scan,
    View(ActiveView),
    Select(String),
    Toggle { device_id: String, port_id: String },
    Dump,
    Quit,
}

impl HeadlessCommand {
    /// Engine message for this command. `Dump` is answered by the runner.
    pub fn to_message(&self) -> Option<Message> {
        match self {
            HeadlessCommand::Scan => Some(Message::StartScan),
            HeadlessCommand::View(view) => Some(Message::SwitchView(*view)),
            HeadlessCommand::Select(device_id) => Some(Message::SelectDevice {
                device_id: device_id.clone(),
            }),
            HeadlessCommand::Toggle { device_id, port_id } => Some(Message::TogglePort {
                device_id: device_id.clone(),
                port_id: port_id.clone(),
            }),
            HeadlessCommand::Dump => None,
            HeadlessCommand::Quit => Some(Message::Quit),
        }
    }
}

/// Parse a line of input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>> {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb, args.as_slice()) {
        ("scan", []) => HeadlessCommand::Scan,
        ("dump", []) => HeadlessCommand::Dump,
        ("q" | "quit", []) => HeadlessCommand::Quit,
        ("view", [view]) => HeadlessCommand::View(
            view.parse()
                .map_err(|reason: String| Error::command(trimmed, reason))?,
        ),
        ("select", [device_id]) => HeadlessCommand::Select((*device_id).to_string()),
        ("toggle", [device_id, port_id]) => HeadlessCommand::Toggle {
            device_id: (*device_id).to_string(),
            port_id: (*port_id).to_string(),
        },
        ("scan" | "dump" | "q" | "quit", _) => {
            return Err(Error::command(trimmed, "takes no arguments"))
        }
        ("view", _) => return Err(Error::command(trimmed, "usage: view <scan|collect|update>")),
        ("select", _) => return Err(Error::command(trimmed, "usage: select <device>")),
        ("toggle", _) => return Err(Error::command(trimmed, "usage: toggle <device> <port>")),
        _ => return Err(Error::command(trimmed, "unknown command")),
    };

    Ok(Some(command))
}
