//! Mock adapters shared by the integration tests.

use coinvend::app::events::AppEvent;
use coinvend::app::ports::{ConfigError, ConfigPort, EventSink};
use coinvend::config::MachineConfig;
use coinvend::machine::Status;

// ── RecordingSink ─────────────────────────────────────────────

/// Event sink that records every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status transitions seen so far, in order.
    pub fn transitions(&self) -> Vec<(Status, Status)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StatusChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── MockConfig ────────────────────────────────────────────────

/// Config source that returns a canned result.
pub struct MockConfig {
    pub result: Result<MachineConfig, ConfigError>,
}

impl MockConfig {
    pub fn with(config: MachineConfig) -> Self {
        Self { result: Ok(config) }
    }

    pub fn failing(err: ConfigError) -> Self {
        Self { result: Err(err) }
    }
}

impl ConfigPort for MockConfig {
    fn load(&self) -> Result<MachineConfig, ConfigError> {
        self.result.clone()
    }
}
