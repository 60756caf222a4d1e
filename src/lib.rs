//! Left outer join of two CSV inputs on a named key column: the right input
//! is read to the end and indexed, the left input is streamed through it.

pub mod columns;
pub mod join;
pub mod reader;
pub mod table;

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("column `{0}` is not found")]
    ColumnNotFound(String),
    #[error("key `{0}` is duplicated")]
    DuplicateKey(String),
    /// A malformed row or any other parse error, passed through verbatim.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, JoinError>;
