//! Fuzz target: `machine::change::find_change`
//!
//! Arbitrary owed amounts against arbitrary treasuries.  Any change that is
//! found must be worth exactly the amount owed and fit inside the treasury.
//!
//! cargo fuzz run fuzz_change_search

#![no_main]

use coinvend::coin::Coin;
use coinvend::machine::change::{find_change, value_of};
use coinvend::tally::Tally;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Keep the search bounded: owed up to 1023c, at most 63 of each coin.
    let rest = u64::from(u16::from_le_bytes([data[0], data[1]]) & 0x3ff);
    let available = Tally::from_pairs([
        (Coin::Quarter, u32::from(data[2] & 0x3f)),
        (Coin::Dime, u32::from(data[3] & 0x3f)),
        (Coin::Nickel, u32::from(data[4] & 0x3f)),
    ]);

    if let Some(change) = find_change(rest, &available) {
        assert_eq!(value_of(&change), rest);
        for (coin, n) in change.iter() {
            assert!(n <= available.get(coin), "paid more {coin} than stocked");
        }
        assert_eq!(change.get(Coin::Unrecognized), 0);
    }
});
