//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the [`VendingMachine`] and turns each
//! [`AppCommand`] into one machine call plus the events describing it.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AppService         │
//!                 │   VendingMachine        │
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::machine::{MachineSnapshot, SelectOutcome, VendingMachine};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    machine: VendingMachine,
    commands_handled: u64,
}

impl AppService {
    /// Wrap an already stocked machine.
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            machine,
            commands_handled: 0,
        }
    }

    /// Announce the initial machine state.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.machine.snapshot()));
        info!("AppService started in {}", self.machine.status());
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one customer command to the machine.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) {
        self.commands_handled += 1;
        let prev_status = self.machine.status();

        match cmd {
            AppCommand::InsertCoin { weight, size } => {
                let coin = self.machine.insert_coin(weight, size);
                if coin.is_recognized() {
                    sink.emit(&AppEvent::CoinAccepted {
                        coin,
                        inserted_value: self.machine.inserted_value(),
                    });
                } else {
                    sink.emit(&AppEvent::CoinRejected { weight, size });
                }
            }
            AppCommand::SelectProduct(product) => match self.machine.select_product(product) {
                SelectOutcome::Dispensed { change } => {
                    sink.emit(&AppEvent::Sale { product, change });
                }
                refused => {
                    sink.emit(&AppEvent::SaleRefused {
                        product,
                        status: refused.status(),
                    });
                }
            },
            AppCommand::TakeProduct => {
                let items = self.machine.take_product();
                if !items.is_empty() {
                    sink.emit(&AppEvent::ProductCollected(items));
                }
            }
            AppCommand::TakeChange => {
                let coins = self.machine.take_change();
                if !coins.is_empty() {
                    sink.emit(&AppEvent::ChangeCollected(coins));
                }
            }
            AppCommand::ReturnCoins => {
                let coins = self.machine.return_coins();
                if !coins.is_empty() {
                    sink.emit(&AppEvent::CoinsReturned(coins));
                }
            }
            AppCommand::ResetStatus => self.machine.reset_status(),
        }

        let new_status = self.machine.status();
        if new_status != prev_status {
            sink.emit(&AppEvent::StatusChanged {
                from: prev_status,
                to: new_status,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Read-only access to the machine for rendering.
    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        self.machine.snapshot()
    }

    /// Commands handled since startup.
    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }
}
