//! Externally visible machine status.
//!
//! The status is a display hint: operations set it as a side effect and
//! the front end reads it.  The only rule that reads it back is
//! [`Status::settle`], applied by `reset_status` between interactions.
//!
//! ```text
//!  AwaitingCoin ──[coin accepted]──▶ CoinInserted
//!       │                                 │
//!       └──────────[select]───────────────┤
//!                                         ▼
//!     SoldOut · InsufficientFunds · CannotMakeChange · ProductDispensed
//!                                         │
//!                                   [reset_status]
//!                                         ▼
//!                      CoinInserted (value > 0) / AwaitingCoin
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    AwaitingCoin = 0,
    SoldOut = 1,
    CoinInserted = 2,
    ProductDispensed = 3,
    InsufficientFunds = 4,
    CannotMakeChange = 5,
}

impl Status {
    /// Total number of statuses.
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::AwaitingCoin,
        Self::SoldOut,
        Self::CoinInserted,
        Self::ProductDispensed,
        Self::InsufficientFunds,
        Self::CannotMakeChange,
    ];

    /// Status to show once the customer has seen the outcome of the last
    /// interaction.
    pub fn settle(self, inserted_value: u32) -> Self {
        match self {
            Self::CannotMakeChange
            | Self::InsufficientFunds
            | Self::ProductDispensed
            | Self::SoldOut
            | Self::CoinInserted => {
                if inserted_value == 0 {
                    Self::AwaitingCoin
                } else {
                    Self::CoinInserted
                }
            }
            Self::AwaitingCoin => self,
        }
    }

    /// True for the two resting states a reset can produce.
    pub fn is_base(self) -> bool {
        matches!(self, Self::AwaitingCoin | Self::CoinInserted)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AwaitingCoin => "AwaitingCoin",
            Self::SoldOut => "SoldOut",
            Self::CoinInserted => "CoinInserted",
            Self::ProductDispensed => "ProductDispensed",
            Self::InsufficientFunds => "InsufficientFunds",
            Self::CannotMakeChange => "CannotMakeChange",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
