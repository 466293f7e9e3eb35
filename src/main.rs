#![cfg(not(tarpaulin_include))]

use log::error;
use std::io::{self, Write};

use timetable::command::{Command, Input, execute, read_input};
use timetable::config::Config;
use timetable::store::TimetableStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: timetable [--data <path>] [--export <path>]");
            return Ok(());
        }
    };

    let mut store = TimetableStore::init(config);
    print!("{}", store.render());

    let mut status = String::from("ok");
    loop {
        print!("({}) > ", status);
        io::stdout().flush()?;

        let line = match read_input(&mut io::stdin().lock()) {
            Input::Line(line) => line,
            Input::Unreadable => {
                status = String::from("invalid command");
                continue;
            }
            Input::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            status = String::from("invalid command");
            continue;
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut store, &command) {
            Ok(output) => {
                println!("{}", output);
                if matches!(
                    command,
                    Command::Add { .. } | Command::Delete { .. } | Command::Generate
                ) {
                    print!("{}", store.render());
                }
                status = String::from("ok");
            }
            Err(e) => {
                error!("{}", e);
                println!("Error: {}", e);
                status = e.status().to_string();
            }
        }
    }

    Ok(())
}
