//! Unified error types for the vending machine.
//!
//! A single `Error` enum that every subsystem converts into. Business
//! outcomes (insufficient funds, sold out, no change) are *not* errors;
//! they surface as [`Status`](crate::machine::status::Status) values.
//! Only rejected console input and invalid stocking requests land here.
//! All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A console command was rejected before reaching the machine.
    Command(CommandError),
    /// A stocking request was invalid.
    Stock(StockError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(e) => write!(f, "{e}"),
            Self::Stock(e) => write!(f, "stock: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Why a console line was rejected. The `Display` text is shown to the
/// customer verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line.
    Empty,
    /// First token is not a known command.
    UnknownCommand,
    /// Too few arguments; carries the usage hint.
    MissingArgument(&'static str),
    /// A numeric argument did not parse.
    InvalidNumber,
    /// `select` named a product the machine does not sell.
    UnknownProduct,
    /// `take` named something other than `product` or `change`.
    UnknownTray,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input"),
            Self::UnknownCommand => write!(f, "Incorrect command"),
            Self::MissingArgument(usage) => write!(f, "{usage}"),
            Self::InvalidNumber => write!(f, "Weight and size must be whole numbers"),
            Self::UnknownProduct => write!(f, "Unknown product, choose cola, candy or chips"),
            Self::UnknownTray => write!(f, "Type 'take product' or 'take change'"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Stock errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockError {
    /// Only real denominations can be loaded into the treasury.
    UnrecognizedCoin,
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCoin => write!(f, "cannot stock unrecognized coins"),
        }
    }
}

impl From<StockError> for Error {
    fn from(e: StockError) -> Self {
        Self::Stock(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
