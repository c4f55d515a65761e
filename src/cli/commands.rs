//! This module is where the dashboard commands run.
//!
//! Deskboard command line syntax:
//!
//! - deskboard --help | Command Line Help
//! - deskboard [--home <dir>] | Run the dashboard REPL.
//!
//! Once the user is inside the REPL, the command parser takes over.
//! The commands the dashboard supports:
//!
//! - tables
//! - view <table> [--json]
//! - add customer
//!
//! Everything presentational lives on this side of the fence; the store
//! only ever hands back tables and messages.

use std::io::{self, Write};
use std::sync::{Arc, RwLock};

use crate::cli::messages::{highlight_argument, system_message};
use crate::cli::parsers::Command;
use crate::persistence::{StoreError, Table};
use crate::sessions::session::Session;

/// The executor that runs one parsed [`Command`] against the store held
/// by the session.
///
/// Every command gets its own executor, the same way every statement
/// did in earlier iterations of this CLI. The executor owns nothing; it
/// borrows the store through the session for the duration of one
/// interaction.
pub struct DashboardExecutor {
    command: Command,
    session: Arc<RwLock<Session>>,
}

/// What a finished command hands back to the REPL for display.
///
/// A loaded [`Table`] is rendered by the main loop after the status
/// line; a message is printed verbatim, which is exactly what the store
/// contract asks for on confirmations and validation warnings.
pub struct CommandResult {
    pub table: Option<Table>,
    pub message: Option<String>,
    pub n_rows_processed: Option<usize>,
}

fn prompt_field(label: &str) -> io::Result<String> {
    //! Ask for one form field on its own line and hand back the raw
    //! answer. Only the line terminator is stripped; emptiness checks
    //! belong to the store.

    print!("{:12} > ", label);
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;

    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

impl DashboardExecutor {
    pub fn new(command: Command, session: &Arc<RwLock<Session>>) -> DashboardExecutor {
        DashboardExecutor {
            command,
            session: Arc::clone(session),
        }
    }

    pub fn execute(&self) -> Result<CommandResult, StoreError> {
        //! Run the assigned command and return whatever should be
        //! displayed.
        //!
        //! A validation failure comes back as a displayable message,
        //! not an error; the REPL keeps running. I/O failures propagate
        //! and end the session.

        let store = {
            let session = self.session.read().unwrap();
            session.store()
        };

        match &self.command {
            Command::Tables => {
                let table_names = store.table_names();

                println!("There are {} tables on this dashboard.", table_names.len());
                for (index, table_name) in table_names.iter().enumerate() {
                    println!("{:5}. {:10}", index + 1, table_name);
                }

                Ok(CommandResult {
                    table: None,
                    message: None,
                    n_rows_processed: Some(0),
                })
            }
            Command::View { table_name, json } => {
                let table = store.load_table(table_name)?;
                let n_rows = table.count_rows();

                if *json {
                    let rendered = serde_json::to_string_pretty(&table.to_json())
                        .unwrap_or_else(|_| "[]".to_string());

                    Ok(CommandResult {
                        table: None,
                        message: Some(rendered),
                        n_rows_processed: Some(n_rows),
                    })
                } else {
                    Ok(CommandResult {
                        table: Some(table),
                        message: None,
                        n_rows_processed: Some(n_rows),
                    })
                }
            }
            Command::AddCustomer => {
                println!(
                    "{}",
                    system_message(
                        "form",
                        format!(
                            "Adding a new customer. Fill in all {} fields.",
                            highlight_argument("five")
                        )
                    )
                );

                let name = prompt_field("Name")?;
                let region = prompt_field("Region")?;
                let total_spent = prompt_field("Total Spent")?;
                let email = prompt_field("Email")?;
                let phone = prompt_field("Phone")?;

                match store.add_customer(&name, &region, &total_spent, &email, &phone) {
                    Ok(confirmation) => Ok(CommandResult {
                        table: None,
                        message: Some(confirmation),
                        n_rows_processed: Some(1),
                    }),
                    Err(error) if error.is_recoverable() => Ok(CommandResult {
                        table: None,
                        message: Some(format!("Please fill in all fields; {}.", error)),
                        n_rows_processed: Some(0),
                    }),
                    Err(error) => Err(error),
                }
            }
        }
    }
}
