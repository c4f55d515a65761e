use std::io;

use thiserror::Error;

/// Everything that can go wrong inside the store.
///
/// Only two of these are ever shown to the user as recoverable:
/// [`StoreError::Validation`] comes back as an inline warning on the add
/// form, and [`StoreError::UnknownTable`] as a plain message. An
/// [`StoreError::Io`] failure is fatal; there is no partial-seed or
/// partial-write recovery.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing required field(s): {0}")]
    Validation(String),

    #[error("unknown table '{0}'")]
    UnknownTable(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StoreError {
    pub fn is_recoverable(&self) -> bool {
        //! Whether the REPL should keep running after reporting this
        //! error, or treat it as fatal.

        matches!(self, StoreError::Validation(_) | StoreError::UnknownTable(_))
    }
}
