//! Change-making search.
//!
//! Exhaustive, bounded, exact-match search over the three real
//! denominations.  The visiting order is fixed and is part of the
//! contract, because it decides *which* combination is paid out when
//! several would do:
//!
//! ```text
//!  for quarters in (0..=max_q).rev()        // highest first, downward
//!    for dimes  in (0..=max_d).rev()        // middle, downward
//!      for nickels in 0..=max_n             // lowest, upward
//!        value > rest  → abandon this inner loop
//!        value == rest → take it
//! ```
//!
//! This biases toward high-value coins for a given quarter count but is
//! not a global minimum-coin solver.

use log::debug;

use crate::coin::Coin;
use crate::tally::Tally;

/// Denominations from highest to lowest value.
const SEARCH_ORDER: [Coin; 3] = [Coin::Quarter, Coin::Dime, Coin::Nickel];

/// Find coins from `available` worth exactly `rest` cents.
///
/// Returns `Some(empty)` when `rest` is zero, `None` when no exact
/// combination exists.
pub fn find_change(rest: u64, available: &Tally<Coin>) -> Option<Tally<Coin>> {
    if rest == 0 {
        return Some(Tally::new());
    }

    let [high, mid, low] = SEARCH_ORDER;
    let (hv, mv, lv) = (value(high), value(mid), value(low));

    // Most units of each coin that could possibly contribute.
    let max_of = |coin: Coin, v: u64| u64::from(available.get(coin)).min(rest / v);
    let (max_h, max_m, max_l) = (max_of(high, hv), max_of(mid, mv), max_of(low, lv));

    let reachable = max_h * hv + max_m * mv + max_l * lv;
    if reachable < rest {
        debug!("change: {rest}c unreachable, at most {reachable}c usable");
        return None;
    }

    for h in (0..=max_h).rev() {
        for m in (0..=max_m).rev() {
            for l in 0..=max_l {
                let sum = h * hv + m * mv + l * lv;
                if sum > rest {
                    break;
                }
                if sum == rest {
                    debug!("change: {rest}c as {h}x{high} {m}x{mid} {l}x{low}");
                    return Some(Tally::from_pairs([
                        (high, h as u32),
                        (mid, m as u32),
                        (low, l as u32),
                    ]));
                }
            }
        }
    }

    debug!("change: no exact combination for {rest}c");
    None
}

fn value(coin: Coin) -> u64 {
    u64::from(coin.value())
}

/// Cents represented by a tally of coins.
pub fn value_of(coins: &Tally<Coin>) -> u64 {
    coins.iter().map(|(c, n)| value(c) * u64::from(n)).sum()
}
