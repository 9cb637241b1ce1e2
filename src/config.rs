//! Machine stocking configuration.
//!
//! Describes the coins and products loaded into the machine at power-on.
//! Read once at startup through a [`ConfigPort`](crate::app::ports::ConfigPort);
//! the running machine never writes it back.

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::product::Product;

/// Initial stock for a machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Coins preloaded into the treasury for paying change.
    pub coins: CoinStock,
    /// Units of each product in the columns.
    pub products: ProductStock,
}

/// Treasury contents per denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoinStock {
    pub nickels: u32,
    pub dimes: u32,
    pub quarters: u32,
}

impl Default for CoinStock {
    fn default() -> Self {
        Self {
            nickels: 1,
            dimes: 0,
            quarters: 1,
        }
    }
}

impl CoinStock {
    /// Count for a denomination; the sentinel is never stocked.
    pub fn count(&self, coin: Coin) -> u32 {
        match coin {
            Coin::Nickel => self.nickels,
            Coin::Dime => self.dimes,
            Coin::Quarter => self.quarters,
            Coin::Unrecognized => 0,
        }
    }
}

/// Column contents per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductStock {
    pub cola: u32,
    pub candy: u32,
    pub chips: u32,
}

impl Default for ProductStock {
    fn default() -> Self {
        Self {
            cola: 0,
            candy: 2,
            chips: 2,
        }
    }
}

impl ProductStock {
    pub fn count(&self, product: Product) -> u32 {
        match product {
            Product::Cola => self.cola,
            Product::Candy => self.candy,
            Product::Chips => self.chips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_stock() {
        let c = MachineConfig::default();
        assert_eq!(c.coins.count(Coin::Quarter), 1);
        assert_eq!(c.coins.count(Coin::Dime), 0);
        assert_eq!(c.coins.count(Coin::Nickel), 1);
        assert_eq!(c.products.count(Product::Cola), 0);
        assert_eq!(c.products.count(Product::Candy), 2);
        assert_eq!(c.products.count(Product::Chips), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let mut c = MachineConfig::default();
        c.coins.dimes = 7;
        c.products.cola = 3;
        let json = serde_json::to_string(&c).unwrap();
        let c2: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
    }

    #[test]
    fn missing_fields_fall_back_to_factory_stock() {
        let c: MachineConfig = serde_json::from_str(r#"{ "coins": { "dimes": 4 } }"#).unwrap();
        assert_eq!(c.coins.dimes, 4);
        assert_eq!(c.coins.quarters, 1);
        assert_eq!(c.products, ProductStock::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let r = serde_json::from_str::<MachineConfig>(r#"{ "coins": { "pennies": 4 } }"#);
        assert!(r.is_err());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let r = serde_json::from_str::<MachineConfig>(r#"{ "products": { "cola": -1 } }"#);
        assert!(r.is_err());
    }

    #[test]
    fn sentinel_is_never_stocked() {
        assert_eq!(CoinStock::default().count(Coin::Unrecognized), 0);
    }
}
