//! The place where the command line and REPL command parsers are
//! defined.
//!
//! When the functionality becomes extensive, they will each have
//! their own files.

use std::path::PathBuf;

use clap::{Parser, arg, command};

use crate::cli::messages::{highlight_argument, system_message};

#[derive(Parser)]
#[command(name = "deskboard")]
#[command(about = "A CSV-backed company dashboard, on the command line", long_about = None)]
pub struct CliParser {
    // Base directory holding the data/ and finance/ folders. Falls back
    // to DESKBOARD_HOME, then to the current directory.
    #[arg(long)]
    pub home: Option<PathBuf>,
}

/// One action a user can ask for at the dashboard prompt.
///
/// Session built-ins like `help`, `history` and the `!` repeats are
/// handled by the REPL loop before parsing gets here.
pub enum Command {
    Tables,
    View { table_name: String, json: bool },
    AddCustomer,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        //! Parse one prompt line into a [`Command`].
        //!
        //! Returns a displayable message when the line is not a
        //! command the dashboard knows.

        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["tables"] => Ok(Command::Tables),
            ["view", rest @ ..] if !rest.is_empty() => {
                let (json, name_words) = match rest.split_last() {
                    Some((&"--json", head)) => (true, head),
                    _ => (false, rest),
                };

                if name_words.is_empty() {
                    return Err(system_message(
                        "parser",
                        format!("Usage: {}", highlight_argument("view <table> [--json]")),
                    ));
                }

                // Table names can carry spaces ('Profit & Loss').
                Ok(Command::View {
                    table_name: name_words.join(" "),
                    json,
                })
            }
            ["add", "customer"] => Ok(Command::AddCustomer),
            _ => Err(system_message(
                "parser",
                format!(
                    "Unknown command '{}'. Try '{}'.",
                    line,
                    highlight_argument("help")
                ),
            )),
        }
    }
}
