//! CoinVend vending machine library.
//!
//! The machine core ([`machine`]) and coin identification ([`coin`]) are
//! pure logic with no I/O.  The [`app`] layer drives the core from
//! commands and reports events through port traits; [`adapters`] holds
//! the console, logging and configuration implementations used by the
//! binary.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod coin;
pub mod config;
pub mod error;
pub mod machine;
pub mod product;
pub mod tally;

pub use error::{Error, Result};
