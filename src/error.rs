use std::io;
use thiserror::Error;

/// Errors reading the numbers of a game from the user.
#[derive(Debug, Error)]
pub enum InputError
{
    /// The input was not an integer
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    /// There is no more input
    #[error("input closed")]
    Closed,
    /// Reading the input failed
    #[error("unable to read input: {0}")]
    Io(#[from] io::Error)
}
