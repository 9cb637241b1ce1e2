//! Coin identification.
//!
//! The acceptor measures every inserted object's weight and size.  Each
//! real denomination owns a tolerance box around its nominal weight and
//! size; a measurement inside a box is that coin.
//!
//! ## Overlapping boxes
//!
//! The scan visits denominations in enumeration order (Nickel, Dime,
//! Quarter) and keeps the **last** box that matched.  With the factory
//! table no boxes overlap, so the rule only matters if the table is ever
//! widened; ambiguous measurements are deliberately not rejected.

use serde::{Deserialize, Serialize};

use crate::tally::Slot;

/// Coin denominations, plus a sentinel for anything the acceptor could
/// not identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Coin {
    Nickel = 0,
    Dime = 1,
    Quarter = 2,
    Unrecognized = 3,
}

/// Physical description of a real denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinSpec {
    pub coin: Coin,
    /// Face value in cents.
    pub value: u32,
    pub weight: u32,
    pub size: u32,
    pub weight_tolerance: u32,
    pub size_tolerance: u32,
}

impl CoinSpec {
    /// True if the measurement lies inside this coin's tolerance box
    /// (bounds inclusive).
    pub fn matches(&self, weight: u32, size: u32) -> bool {
        within(weight, self.weight, self.weight_tolerance)
            && within(size, self.size, self.size_tolerance)
    }
}

fn within(measured: u32, nominal: u32, tolerance: u32) -> bool {
    measured >= nominal.saturating_sub(tolerance) && measured <= nominal.saturating_add(tolerance)
}

/// Accepted denominations, in enumeration order.
pub const COIN_TABLE: [CoinSpec; 3] = [
    CoinSpec {
        coin: Coin::Nickel,
        value: 5,
        weight: 500,
        size: 50,
        weight_tolerance: 5,
        size_tolerance: 2,
    },
    CoinSpec {
        coin: Coin::Dime,
        value: 10,
        weight: 1000,
        size: 100,
        weight_tolerance: 10,
        size_tolerance: 4,
    },
    CoinSpec {
        coin: Coin::Quarter,
        value: 25,
        weight: 2500,
        size: 250,
        weight_tolerance: 25,
        size_tolerance: 10,
    },
];

impl Coin {
    /// Real denominations in enumeration order.
    pub const ACCEPTED: [Self; 3] = [Self::Nickel, Self::Dime, Self::Quarter];

    /// Physical measurements, or `None` for the sentinel.
    pub fn spec(self) -> Option<&'static CoinSpec> {
        COIN_TABLE.iter().find(|s| s.coin == self)
    }

    /// Face value in cents; the sentinel is worth nothing.
    pub fn value(self) -> u32 {
        self.spec().map_or(0, |s| s.value)
    }

    pub fn is_recognized(self) -> bool {
        self != Self::Unrecognized
    }
}

impl Slot for Coin {
    const ALL: &'static [Self] = &[Self::Nickel, Self::Dime, Self::Quarter, Self::Unrecognized];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Nickel => "nickel",
            Self::Dime => "dime",
            Self::Quarter => "quarter",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl core::fmt::Display for Coin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a measurement to a denomination.
///
/// Returns the last matching entry of [`COIN_TABLE`], or
/// [`Coin::Unrecognized`] when nothing matches.
pub fn identify(weight: u32, size: u32) -> Coin {
    identify_in(&COIN_TABLE, weight, size)
}

/// [`identify`] against an arbitrary table.
pub fn identify_in(table: &[CoinSpec], weight: u32, size: u32) -> Coin {
    let mut found = Coin::Unrecognized;
    for spec in table {
        if spec.matches(weight, size) {
            found = spec.coin;
        }
    }
    found
}
