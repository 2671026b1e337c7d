use std::io;

use rootlab_solve::equation::ConfigError;
use rootlab_table::TableError;
use thiserror::Error;

/// Errors that can occur while solving and printing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid solver settings: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build table: {0}")]
    Table(#[from] TableError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
