//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each application event as one
//! structured line through the `log` facade.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(snapshot) => {
                info!(
                    "START | status={} | treasury [{}] | inventory [{}]",
                    snapshot.status, snapshot.treasury, snapshot.inventory
                );
                if let Ok(json) = serde_json::to_string(snapshot) {
                    debug!("START | snapshot={json}");
                }
            }
            AppEvent::CoinAccepted { coin, inserted_value } => {
                info!("COIN  | accepted {} | credit={}c", coin, inserted_value);
            }
            AppEvent::CoinRejected { weight, size } => {
                info!("COIN  | rejected weight={} size={}", weight, size);
            }
            AppEvent::Sale { product, change } => {
                info!("SALE  | {} | change [{}]", product, change);
            }
            AppEvent::SaleRefused { product, status } => {
                info!("SALE  | {} refused: {}", product, status);
            }
            AppEvent::CoinsReturned(coins) => {
                info!("RETURN| [{}]", coins);
            }
            AppEvent::ProductCollected(items) => {
                info!("TRAY  | product collected [{}]", items);
            }
            AppEvent::ChangeCollected(coins) => {
                info!("TRAY  | change collected [{}]", coins);
            }
            AppEvent::StatusChanged { from, to } => {
                info!("STATE | {} -> {}", from, to);
            }
        }
    }
}
