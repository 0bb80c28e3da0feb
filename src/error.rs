//! Error type for the visualizer

use std::{io, result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than the two required positional arguments were given.
    #[error("insufficient arguments, expected <type> <value>")]
    InsufficientArguments,

    /// The type name is not one of the registered integer types.
    ///
    /// Only raised in strict mode; the permissive lookup degrades to a
    /// zero-width type instead.
    #[error("unknown type `{0}`")]
    UnknownType(String),

    /// The value is not a complete decimal 64-bit integer.
    ///
    /// Only raised in strict mode.
    #[error("`{0}` is not a valid decimal 64-bit integer")]
    UnparsableValue(String),

    /// Underlying cause of error is I/O related
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Underlying cause of error is JSON related
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command line could not be parsed.
    #[error("{0}")]
    Cli(#[from] clap::Error),
}

pub type Result<T> = result::Result<T, Error>;
