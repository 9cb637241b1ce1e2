//! The vending machine core.
//!
//! [`VendingMachine`] owns every piece of mutable state: product
//! inventory, coin treasury, the coins inserted in the current
//! transaction, both pickup trays, and the display status.  It performs
//! no I/O and never blocks; each call is a short computation over
//! in-memory tallies.
//!
//! ```text
//!   insert_coin ──▶ coin::identify ──▶ inserted / change tray
//!   select_product ──▶ change::find_change(treasury)
//!        ├─ found     ──▶ commit: inventory, trays, treasury
//!        └─ not found ──▶ status only, nothing mutated
//! ```
//!
//! The machine is not internally synchronised.  Share it across threads
//! only behind a single lock (e.g. `Mutex<VendingMachine>`).

pub mod change;
pub mod status;

use log::{debug, info};
use serde::Serialize;

use crate::coin::{self, Coin};
use crate::config::MachineConfig;
use crate::error::{Result, StockError};
use crate::product::Product;
use crate::tally::Tally;

pub use status::Status;

/// What a product selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Product dropped into the tray; `change` went to the change tray.
    Dispensed { change: Tally<Coin> },
    /// Inserted value is below the product's cost.
    InsufficientFunds,
    /// No units of the product left.
    SoldOut,
    /// Cost is covered but the treasury cannot pay the exact difference.
    CannotMakeChange,
}

impl SelectOutcome {
    /// Status the machine shows after this outcome.
    pub fn status(&self) -> Status {
        match self {
            Self::Dispensed { .. } => Status::ProductDispensed,
            Self::InsufficientFunds => Status::InsufficientFunds,
            Self::SoldOut => Status::SoldOut,
            Self::CannotMakeChange => Status::CannotMakeChange,
        }
    }
}

/// Read-only copy of the whole machine, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    pub status: Status,
    pub inserted_value: u32,
    pub inserted_coins: Tally<Coin>,
    pub treasury: Tally<Coin>,
    pub inventory: Tally<Product>,
    pub change_tray: Tally<Coin>,
    pub product_tray: Tally<Product>,
}

/// The vending machine.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    inventory: Tally<Product>,
    treasury: Tally<Coin>,
    inserted: Tally<Coin>,
    change_tray: Tally<Coin>,
    product_tray: Tally<Product>,
    status: Status,
}

impl VendingMachine {
    /// An empty machine: no stock, no coins, awaiting a coin.
    pub fn new() -> Self {
        Self {
            inventory: Tally::new(),
            treasury: Tally::new(),
            inserted: Tally::new(),
            change_tray: Tally::new(),
            product_tray: Tally::new(),
            status: Status::AwaitingCoin,
        }
    }

    /// A machine stocked from `config`.
    pub fn from_config(config: &MachineConfig) -> Self {
        let mut machine = Self::new();
        for coin in Coin::ACCEPTED {
            machine.treasury.set(coin, config.coins.count(coin));
        }
        for product in Product::ALL {
            machine.inventory.set(product, config.products.count(product));
        }
        info!(
            "Machine stocked: coins [{}] products [{}]",
            machine.treasury, machine.inventory
        );
        machine
    }

    // ── Setup ─────────────────────────────────────────────────

    /// Set the number of units of `product` in its column.
    pub fn set_inventory(&mut self, product: Product, count: u32) {
        self.inventory.set(product, count);
    }

    /// Set the number of `coin`s held in the treasury.
    pub fn set_coins(&mut self, coin: Coin, count: u32) -> Result<()> {
        if !coin.is_recognized() {
            return Err(StockError::UnrecognizedCoin.into());
        }
        self.treasury.set(coin, count);
        Ok(())
    }

    // ── Customer operations ───────────────────────────────────

    /// Drop an object into the coin slot.
    ///
    /// A recognised coin is credited to the current transaction.  Anything
    /// else falls straight through to the change tray.  Returns what the
    /// acceptor decided.
    pub fn insert_coin(&mut self, weight: u32, size: u32) -> Coin {
        let coin = coin::identify(weight, size);
        if coin.is_recognized() {
            self.inserted.add(coin, 1);
            self.status = Status::CoinInserted;
            debug!("Accepted {coin}, credit now {}c", self.credit());
        } else {
            self.change_tray.add(Coin::Unrecognized, 1);
            debug!("Rejected object weight={weight} size={size}");
        }
        coin
    }

    /// Try to buy one `product` with the coins inserted so far.
    ///
    /// Every refusal leaves inventory, treasury and inserted coins as they
    /// were; only the status changes.
    pub fn select_product(&mut self, product: Product) -> SelectOutcome {
        let outcome = self.try_purchase(product);
        self.status = outcome.status();
        outcome
    }

    fn try_purchase(&mut self, product: Product) -> SelectOutcome {
        let cost = u64::from(product.cost());
        let credit = self.credit();
        if credit < cost {
            debug!("{product}: {credit}c inserted, {cost}c needed");
            return SelectOutcome::InsufficientFunds;
        }
        if self.inventory.get(product) == 0 {
            info!("{product}: sold out");
            return SelectOutcome::SoldOut;
        }

        let rest = credit - cost;
        let Some(change) = change::find_change(rest, &self.treasury) else {
            info!("{product}: cannot pay {rest}c change from [{}]", self.treasury);
            return SelectOutcome::CannotMakeChange;
        };

        self.inventory.remove(product, 1);
        self.product_tray.add(product, 1);
        self.treasury.withdraw(&change);
        self.change_tray.merge(&change);
        self.treasury.merge(&self.inserted);
        self.clear_inserted();

        info!("{product}: dispensed, change [{change}]");
        SelectOutcome::Dispensed { change }
    }

    /// Empty the product tray, returning what was in it.
    pub fn take_product(&mut self) -> Tally<Product> {
        self.product_tray.drain()
    }

    /// Empty the change tray, returning what was in it.
    pub fn take_change(&mut self) -> Tally<Coin> {
        self.change_tray.drain()
    }

    /// Send the coins inserted so far to the change tray.
    ///
    /// Merges with anything already waiting there.  Returns the coins
    /// moved.
    pub fn return_coins(&mut self) -> Tally<Coin> {
        let returned = self.inserted;
        self.change_tray.merge(&returned);
        self.clear_inserted();
        if !returned.is_empty() {
            info!("Returned [{returned}]");
        }
        returned
    }

    /// Settle the status after the customer has seen the last outcome.
    pub fn reset_status(&mut self) {
        self.status = self.status.settle(self.inserted_value());
        debug_assert!(self.status.is_base());
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn status(&self) -> Status {
        self.status
    }

    /// Cents credited in the current transaction, always the value of
    /// [`inserted_coins`](Self::inserted_coins).  Saturates at `u32::MAX`.
    pub fn inserted_value(&self) -> u32 {
        u32::try_from(self.credit()).unwrap_or(u32::MAX)
    }

    /// Treasury count for one denomination.
    pub fn coins(&self, coin: Coin) -> u32 {
        self.treasury.get(coin)
    }

    pub fn inventory(&self) -> &Tally<Product> {
        &self.inventory
    }

    pub fn treasury(&self) -> &Tally<Coin> {
        &self.treasury
    }

    pub fn inserted_coins(&self) -> &Tally<Coin> {
        &self.inserted
    }

    pub fn change_tray(&self) -> &Tally<Coin> {
        &self.change_tray
    }

    pub fn product_tray(&self) -> &Tally<Product> {
        &self.product_tray
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            status: self.status,
            inserted_value: self.inserted_value(),
            inserted_coins: self.inserted,
            treasury: self.treasury,
            inventory: self.inventory,
            change_tray: self.change_tray,
            product_tray: self.product_tray,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn credit(&self) -> u64 {
        change::value_of(&self.inserted)
    }

    fn clear_inserted(&mut self) {
        self.inserted.clear();
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}
