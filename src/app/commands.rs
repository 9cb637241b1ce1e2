//! Inbound commands to the application service.
//!
//! These are the actions a customer (through the console, or any other
//! front end) can ask the [`AppService`](super::service::AppService) to
//! perform.

use crate::product::Product;

/// Commands that front-end adapters send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Drop an object with the given measurements into the coin slot.
    InsertCoin { weight: u32, size: u32 },

    /// Press the selection button for a product.
    SelectProduct(Product),

    /// Collect everything in the product tray.
    TakeProduct,

    /// Collect everything in the change tray.
    TakeChange,

    /// Press the coin-return lever.
    ReturnCoins,

    /// Settle the display after the customer has read it.
    ResetStatus,
}
