use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, ErrorKind};

use crate::error::TimetableResult;
use crate::store::TimetableStore;

lazy_static! {
    static ref ADD_REGEX: Regex =
        Regex::new(r"^(?i:add)\s+([^,]+?)\s*,\s*([^,]+?)\s*,\s*([^,]+?)\s*,\s*(.+?)\s*$").unwrap();
    static ref DELETE_REGEX: Regex =
        Regex::new(r"^(?i:delete|del)\s+([^,]+?)\s*,\s*([^,]+?)\s*,\s*([^,]+?)\s*$").unwrap();
    static ref FREE_REGEX: Regex =
        Regex::new(r"^(?i:free)\s+([^,]+?)\s*,\s*([^,]+?)\s*$").unwrap();
}

/// One line typed at the timetable prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Show,
    Batches,
    Add {
        batch: String,
        day: String,
        slot: String,
        subject: String,
    },
    Delete {
        batch: String,
        day: String,
        slot: String,
    },
    Free {
        batch: String,
        day: String,
    },
    Export,
    Generate,
}

pub const HELP: &str = "\
Commands:
  help                                    Show this message
  q                                       Quit
  show                                    Print the timetable
  batches                                 List batch names
  add <batch>, <day>, <slot>, <subject>   Put a lecture into a free slot
  delete <batch>, <day>, <slot>           Free a slot holding a lecture
  free <batch>, <day>                     List free slots of a day
  export                                  Write the timetable to the export file
  generate                                Randomly fill 'Auto Batch'";

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "help" => return Some(Command::Help),
            "q" | "quit" => return Some(Command::Quit),
            "show" => return Some(Command::Show),
            "batches" => return Some(Command::Batches),
            "export" => return Some(Command::Export),
            "generate" => return Some(Command::Generate),
            _ => {}
        }

        if let Some(caps) = ADD_REGEX.captures(line) {
            return Some(Command::Add {
                batch: caps[1].to_string(),
                day: caps[2].to_string(),
                slot: caps[3].to_string(),
                subject: caps[4].to_string(),
            });
        }
        if let Some(caps) = DELETE_REGEX.captures(line) {
            return Some(Command::Delete {
                batch: caps[1].to_string(),
                day: caps[2].to_string(),
                slot: caps[3].to_string(),
            });
        }
        if let Some(caps) = FREE_REGEX.captures(line) {
            return Some(Command::Free {
                batch: caps[1].to_string(),
                day: caps[2].to_string(),
            });
        }

        None
    }
}

/// One read from the shell's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// The line was consumed but was not valid UTF-8.
    Unreadable,
    Eof,
}

/// Reads the next line. Bad bytes on one line do not end the session;
/// any other read error is treated as end of input.
pub fn read_input<R: BufRead>(reader: &mut R) -> Input {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Input::Eof,
        Ok(_) => Input::Line(line),
        Err(e) if e.kind() == ErrorKind::InvalidData => Input::Unreadable,
        Err(_) => Input::Eof,
    }
}

/// Runs a command against the store and returns the text to print.
/// `Quit` produces nothing; the caller ends its loop.
pub fn execute(store: &mut TimetableStore, command: &Command) -> TimetableResult<String> {
    let output = match command {
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
        Command::Show => store.render(),
        Command::Batches => store.batch_names().join("\n"),
        Command::Add {
            batch,
            day,
            slot,
            subject,
        } => store.add_lecture(batch, day, slot, subject)?.to_string(),
        Command::Delete { batch, day, slot } => {
            store.delete_lecture(batch, day, slot)?.to_string()
        }
        Command::Free { batch, day } => {
            let slots = store.list_free_slots(batch, day)?;
            let list: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
            format!("Free slots: {}", list.join(", "))
        }
        Command::Export => {
            let path = store.export()?;
            format!("Timetable exported successfully to {}!", path.display())
        }
        Command::Generate => store.auto_generate()?.to_string(),
    };
    Ok(output)
}
