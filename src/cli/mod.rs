use std::{
    io::{self, Write},
    sync::{Arc, RwLock},
};

use colored::Colorize;

use crate::{
    cli::{
        colors::DESKBOARD_BLUE,
        commands::{CommandResult, DashboardExecutor},
        messages::{highlight_argument, system_message},
        parsers::Command,
    },
    persistence::{DashboardStore, StoreConfig, StoreError},
    sessions::session::Session,
};

mod colors;
mod commands;
mod messages;
pub mod parsers;
mod splash_screen;

pub use parsers::CliParser;

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

const DESKBOARD_COMMANDS_LIST: [(&str, &str); 6] = [
    ("!", "execute the last command, add more to go further back"),
    ("help", "list all available commands"),
    ("history", "list command history for this session"),
    ("tables", "list the tables on the dashboard"),
    ("view", "view <table> [--json] renders a table grid"),
    (
        "clockout",
        "the working day ends and so does this session when you exit",
    ),
];

pub fn run_dashboard(config: StoreConfig) -> Result<(), StoreError> {
    splash_screen::splash_screen();

    let store = Arc::new(DashboardStore::open(config)?);
    let session = Arc::new(RwLock::new(Session::client(&store)));

    println!(
        "{}",
        system_message(
            "info",
            format!("All data files loaded successfully.")
        )
    );

    start_repl(session)
}

pub fn show_help() {
    println!(
        "{}",
        system_message(
            "info",
            format!(
                "Use '{}' to append a customer row; everything else is read-only.",
                highlight_argument("add customer")
            )
        )
    );

    println!();
    println!("{:10} {}", "COMMAND".color(DESKBOARD_BLUE), "DETAILS");
    for (command, details) in DESKBOARD_COMMANDS_LIST {
        println!("{:10} {}", command.color(DESKBOARD_BLUE), details)
    }
}

fn start_repl(client_session: Arc<RwLock<Session>>) -> Result<(), StoreError> {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to quit and '{}' to know all commands available.",
                highlight_argument("clockout"),
                highlight_argument("help"),
            ),
        )
    );

    {
        let session = client_session.read().unwrap();
        let session_start_time = session.start_time_string();
        println!(
            "{}",
            system_message(
                "system",
                format!(
                    "New session initiated at '{}'.",
                    highlight_argument(&session_start_time)
                ),
            )
        );
    }

    loop {
        let mut command_result: Option<CommandResult> = None;

        println!();
        print!("{:6} > ", "desk".color(DESKBOARD_BLUE).bold());
        io::stdout().flush()?;

        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let session = client_session.read().unwrap();
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();
            let last_command = session.get_last_command(last);

            if last_command.is_none() {
                println!(
                    "{}",
                    system_message(
                        "system",
                        format!(
                            "No command {} steps back.",
                            highlight_argument(&last.to_string())
                        ),
                    )
                );
                continue;
            } else {
                buffer = last_command.unwrap().to_string();
            }
        }

        {
            let mut session = client_session.write().unwrap();
            session.add_to_command_history(buffer.clone().trim());
        }

        match buffer.trim() {
            "" => continue,
            "history" => {
                let session = client_session.read().unwrap();
                session.show_command_history(None);
            }
            "help" => show_help(),
            "exit" => println!("did you mean '{}'?", "clockout".color(DESKBOARD_BLUE)),
            "clockout" => break,
            line => match Command::parse(line) {
                Ok(command) => {
                    let executor = DashboardExecutor::new(command, &client_session);
                    match executor.execute() {
                        Ok(result) => {
                            println!(
                                "{}",
                                system_message(
                                    "desk",
                                    format!(
                                        "{} row(s) processed!",
                                        result.n_rows_processed.unwrap_or(0)
                                    )
                                )
                            );

                            command_result = Some(result);
                        }
                        Err(error) if error.is_recoverable() => {
                            println!("{}", system_message("store", error.to_string()));
                        }
                        // Disk trouble; nothing graceful left to do.
                        Err(error) => {
                            log::error!("fatal store failure: {}", error);
                            return Err(error);
                        }
                    }
                }
                Err(error) => {
                    println!("{}", error);
                }
            },
        }

        if let Some(result) = command_result.take() {
            if let Some(message) = result.message {
                println!("{}", message);
            }
            if let Some(table) = result.table {
                println!("{}", table)
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
