//! Products sold by the machine.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::tally::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Product {
    Cola = 0,
    Candy = 1,
    Chips = 2,
}

impl Product {
    pub const ALL: [Self; 3] = [Self::Cola, Self::Candy, Self::Chips];

    /// Unit price in cents.
    pub const fn cost(self) -> u32 {
        match self {
            Self::Cola => 100,
            Self::Candy => 65,
            Self::Chips => 50,
        }
    }
}

impl Slot for Product {
    const ALL: &'static [Self] = &[Self::Cola, Self::Candy, Self::Chips];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Cola => "cola",
            Self::Candy => "candy",
            Self::Chips => "chips",
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Product {
    type Err = CommandError;

    /// Case-insensitive product name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(CommandError::UnknownProduct)
    }
}
