//! Port traits: the boundary between the application core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (event sinks, configuration sources) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them
//! via generics, so the core never touches a file or a terminal.

use crate::config::MachineConfig;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / display)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config source → domain)
// ───────────────────────────────────────────────────────────────

/// Loads the machine's initial stock.
///
/// Read-only: the machine's running state is never persisted.
pub trait ConfigPort {
    /// Load the stocking configuration.
    fn load(&self) -> Result<MachineConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration exists at the source.
    NotFound,
    /// The stored configuration could not be parsed.
    Corrupted(String),
    /// Generic I/O error from the backing source.
    IoError(String),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted(msg) => write!(f, "config corrupted: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
