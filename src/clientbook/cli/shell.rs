//! The interactive menu.
//!
//! Reads from any `BufRead` and writes to any `Write` so tests can script a
//! whole session. End of input is treated like choosing Exit.

use super::print::{render_client_table, render_report, render_search_results, write_messages};
use clientbook::api::{ClientApi, ClientUpdate, CmdMessage, CmdResult};
use clientbook::error::{ClientbookError, Result};
use clientbook::model::{is_valid_phone, parse_id};
use clientbook::store::DataStore;
use colored::Colorize;
use std::io::{BufRead, Write};

const MENU: &str = "\
====== CLIENT MANAGEMENT ======
1. Register client
2. List clients
3. Update client
4. Remove client
5. Search client
6. Management report
7. Exit
===============================";

/// What the menu loop does after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: ClientApi<S>,
    input: R,
    out: W,
    clear_screen: bool,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: ClientApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            clear_screen: false,
        }
    }

    /// Clear the terminal before every menu. Only sensible when `out` is a tty.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    #[cfg(test)]
    fn into_parts(self) -> (ClientApi<S>, W) {
        (self.api, self.out)
    }

    /// Runs the menu until Exit or end of input, then saves one last time.
    ///
    /// The final save is attempted even if the terminal fails mid-session.
    pub fn run(&mut self) -> Result<()> {
        let outcome = self.menu_loop();
        let exited = self.exit();
        outcome.and(exited)
    }

    fn menu_loop(&mut self) -> Result<()> {
        let mut first = true;
        loop {
            // Leave start-up warnings visible under the first menu
            if self.clear_screen && !first {
                self.out.flush()?;
                console::Term::stdout().clear_screen()?;
            }
            first = false;
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.register()?,
                "2" => self.list()?,
                "3" => self.update()?,
                "4" => self.remove()?,
                "5" => self.search()?,
                "6" => self.report()?,
                "7" => break,
                _ => {
                    writeln!(self.out, "{}", "Invalid option.".red())?;
                    self.pause()?
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        let messages = self.api.save();
        write_messages(&mut self.out, &messages)?;
        writeln!(self.out, "\nExiting... Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn register(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Register Client ---")?;

        let Some(name) = self.prompt_required("Client name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt_phone("Phone (digits only, e.g. 86999999999): ", false)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(service) = self.prompt_required("Contracted service (e.g. Manicure, Pedreiro): ")?
        else {
            return Ok(Flow::Exit);
        };

        let result = self.api.create_client(&name, &phone, &service);
        self.write_outcome(result)?;
        self.pause()
    }

    fn list(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Client List ---")?;
        let result = self.api.list_clients()?;
        write!(self.out, "{}", render_client_table(&result.listed_clients))?;
        self.pause()
    }

    fn update(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Update Client ---")?;
        if self.api.is_empty() {
            writeln!(self.out, "No clients to update.")?;
            return self.pause();
        }

        let Some(id) = self.prompt_id("Client ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(current) = self.api.find_client(id).cloned() else {
            writeln!(self.out, "{}", "Client not found.".red())?;
            return self.pause();
        };

        writeln!(self.out, "Editing: {}", current.name)?;
        let Some(name) = self.prompt("New name (Enter to keep): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt_phone("New phone (Enter to keep): ", true)? else {
            return Ok(Flow::Exit);
        };
        let Some(service) = self.prompt("New service (Enter to keep): ")? else {
            return Ok(Flow::Exit);
        };

        let update = ClientUpdate {
            name: Some(name),
            phone: Some(phone),
            service: Some(service),
        };
        let result = self.api.update_client(id, &update);
        self.write_outcome(result)?;
        self.pause()
    }

    fn remove(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Remove Client ---")?;
        if self.api.is_empty() {
            writeln!(self.out, "No clients to remove.")?;
            return self.pause();
        }

        let Some(id) = self.prompt_id("Client ID to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.api.find_client(id).map(|c| c.name.clone()) else {
            writeln!(self.out, "{}", "Client not found.".red())?;
            return self.pause();
        };

        let question = format!("Are you sure you want to remove {}? (y/N): ", name);
        let Some(answer) = self.prompt(&question)? else {
            return Ok(Flow::Exit);
        };
        if is_yes(&answer) {
            let result = self.api.delete_client(id);
            self.write_outcome(result)?;
        } else {
            writeln!(self.out, "\nOperation cancelled.")?;
        }
        self.pause()
    }

    fn search(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Search Client ---")?;
        let Some(term) = self.prompt("Name or phone to search: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.search_clients(&term)?;
        if result.listed_clients.is_empty() {
            write_messages(&mut self.out, &result.messages)?;
        } else {
            write!(self.out, "\n{}", render_search_results(&result.listed_clients))?;
        }
        self.pause()
    }

    fn report(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Management Report ---")?;
        let result = self.api.report()?;
        let report = result.report.unwrap_or_default();
        write!(self.out, "{}", render_report(&report))?;
        self.pause()
    }

    /// Prints the messages of a mutation, or its error. Neither ends the session.
    fn write_outcome(&mut self, result: Result<CmdResult>) -> Result<()> {
        writeln!(self.out)?;
        match result {
            Ok(result) => write_messages(&mut self.out, &result.messages)?,
            Err(e) => writeln!(self.out, "{}", format!(">> {}", e).red())?,
        }
        Ok(())
    }

    /// Reads one trimmed line. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn prompt_required(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(message)? {
                Some(value) if value.is_empty() => {
                    writeln!(self.out, "{}", ">> This field is required. Try again.".yellow())?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Re-prompts until the phone is valid. With `allow_blank`, Enter returns "".
    fn prompt_phone(&mut self, message: &str, allow_blank: bool) -> Result<Option<String>> {
        loop {
            let phone = if allow_blank {
                self.prompt(message)?
            } else {
                self.prompt_required(message)?
            };
            match phone {
                Some(phone) if (allow_blank && phone.is_empty()) || is_valid_phone(&phone) => {
                    return Ok(Some(phone));
                }
                Some(_) => writeln!(
                    self.out,
                    "{}",
                    ">> Invalid phone. Digits only, no spaces or symbols (at least 10 with area code)."
                        .yellow()
                )?,
                None => return Ok(None),
            }
        }
    }

    /// Outer `None` is end of input; inner `None` means the id was not a number.
    fn prompt_id(&mut self, message: &str) -> Result<Option<Option<u64>>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };
        match parse_id(&raw) {
            Ok(id) => Ok(Some(Some(id))),
            Err(ClientbookError::InvalidId(_)) => {
                writeln!(self.out, "{}", ">> Invalid ID.".red())?;
                Ok(Some(None))
            }
            Err(e) => Err(e),
        }
    }

    fn pause(&mut self) -> Result<Flow> {
        match self.prompt("\nPress Enter to continue...")? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }

    /// Surfaces open-time messages (e.g. a corrupt data file) before the first menu.
    pub fn announce(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write_messages(&mut self.out, messages)?;
        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
}
