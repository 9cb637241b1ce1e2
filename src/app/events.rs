//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log them, count them, show them.

use crate::coin::Coin;
use crate::machine::{MachineSnapshot, Status};
use crate::product::Product;
use crate::tally::Tally;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial machine state).
    Started(MachineSnapshot),

    /// A coin was identified and credited.
    CoinAccepted { coin: Coin, inserted_value: u32 },

    /// The acceptor could not identify an object; it went to the change tray.
    CoinRejected { weight: u32, size: u32 },

    /// A product was dispensed with the given change.
    Sale { product: Product, change: Tally<Coin> },

    /// A selection was refused; `status` says why.
    SaleRefused { product: Product, status: Status },

    /// Inserted coins were moved to the change tray.
    CoinsReturned(Tally<Coin>),

    /// The product tray was emptied.
    ProductCollected(Tally<Product>),

    /// The change tray was emptied.
    ChangeCollected(Tally<Coin>),

    /// The display status moved.
    StatusChanged { from: Status, to: Status },
}
