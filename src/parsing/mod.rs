//! Readers for the two tabular inputs: the class grade sheet and the master
//! roster, both consumed as CSV exports.

use thiserror::Error;

pub mod column;
pub mod table;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid score column {0:?}: must be a single letter A-Z")]
    InvalidColumnSpecifier(String),

    #[error("invalid input format: {0}")]
    InvalidFormat(String),
}
