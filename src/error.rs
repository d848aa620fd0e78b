use std::error;
use std::fmt;
use std::result;

/// Misuse of a treap version detected by one of the checked operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The cursor is positioned at the end and does not refer to an entry.
    ExhaustedCursor,
    /// The cursor was taken from a different version than the receiver.
    ForeignCursor,
    /// The replacement entry is not equivalent to the entry it replaces.
    NotEquivalent,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ExhaustedCursor => write!(f, "cursor does not refer to an entry"),
            Error::ForeignCursor => write!(f, "cursor belongs to a different version"),
            Error::NotEquivalent => write!(f, "replacement entry is not equivalent to the original"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
