//! Text console adapter.
//!
//! Two halves, both pure:
//!
//! - [`parse_command`] turns one input line into a [`ConsoleCommand`],
//!   validating everything before the machine is touched.
//! - The `render_*` functions build the screens the binary prints.
//!
//! | Input                   | Command                          |
//! |-------------------------|----------------------------------|
//! | `insert <w> <s>`        | `AppCommand::InsertCoin`         |
//! | `select <name>`         | `AppCommand::SelectProduct`      |
//! | `take product\|change`  | `AppCommand::TakeProduct/Change` |
//! | `return`                | `AppCommand::ReturnCoins`        |
//! | `exit`                  | `ConsoleCommand::Exit`           |

use heapless::Vec;

use crate::app::commands::AppCommand;
use crate::coin::{COIN_TABLE, Coin};
use crate::error::{CommandError, Result};
use crate::machine::{Status, VendingMachine};
use crate::product::Product;
use crate::tally::{Slot, Tally};

/// Tokens examined per line; anything after the third is ignored.
const MAX_TOKENS: usize = 3;

/// Column width used by every table.
const COL: usize = 9;

const INSERT_USAGE: &str = "To insert quarter type 'insert 2500 250'";
const SELECT_USAGE: &str = "To buy cola type 'select cola'";

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forward to the application service.
    App(AppCommand),
    /// Leave the console loop.
    Exit,
}

// ── Parsing ───────────────────────────────────────────────────

/// Parse one line of customer input (case-insensitive).
pub fn parse_command(line: &str) -> Result<ConsoleCommand> {
    let mut tokens: Vec<&str, MAX_TOKENS> = Vec::new();
    for token in line.split_whitespace() {
        if tokens.push(token).is_err() {
            break;
        }
    }

    let Some(&verb) = tokens.first() else {
        return Err(CommandError::Empty.into());
    };

    let app = match verb.to_ascii_lowercase().as_str() {
        "exit" => return Ok(ConsoleCommand::Exit),
        "return" => AppCommand::ReturnCoins,
        "select" => {
            let name = tokens.get(1).ok_or(CommandError::MissingArgument(SELECT_USAGE))?;
            AppCommand::SelectProduct(name.parse::<Product>()?)
        }
        "take" => {
            let tray = tokens.get(1).ok_or(CommandError::UnknownTray)?;
            if tray.eq_ignore_ascii_case("product") {
                AppCommand::TakeProduct
            } else if tray.eq_ignore_ascii_case("change") {
                AppCommand::TakeChange
            } else {
                return Err(CommandError::UnknownTray.into());
            }
        }
        "insert" => {
            let [_, weight, size] = tokens.as_slice() else {
                return Err(CommandError::MissingArgument(INSERT_USAGE).into());
            };
            AppCommand::InsertCoin {
                weight: parse_measurement(weight)?,
                size: parse_measurement(size)?,
            }
        }
        _ => return Err(CommandError::UnknownCommand.into()),
    };
    Ok(ConsoleCommand::App(app))
}

fn parse_measurement(token: &str) -> core::result::Result<u32, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber)
}

// ── Rendering ─────────────────────────────────────────────────

/// One line describing the machine's current status.
pub fn render_status(machine: &VendingMachine) -> String {
    match machine.status() {
        Status::AwaitingCoin => "INSERT COIN".to_owned(),
        Status::SoldOut => "SOLD OUT".to_owned(),
        Status::CoinInserted => machine.inserted_value().to_string(),
        Status::ProductDispensed => "THANK YOU".to_owned(),
        Status::InsufficientFunds => "INSUFFICIENT FUNDS".to_owned(),
        Status::CannotMakeChange => "CAN'T MAKE CHANGE, INSERT EXACT VALUE".to_owned(),
    }
}

/// Welcome screen: accepted coins, products, and how to use the console.
pub fn render_start_screen(machine: &VendingMachine) -> String {
    let mut out = String::from("Welcome to vending machine simulator!\n\n");

    out.push_str("Accepted coins:\n");
    header(&mut out, &["name", "value", "weight", "size", "available"]);
    for spec in &COIN_TABLE {
        row(
            &mut out,
            &[
                &upper(spec.coin.name()),
                &spec.value.to_string(),
                &spec.weight.to_string(),
                &spec.size.to_string(),
                &machine.coins(spec.coin).to_string(),
            ],
        );
    }
    out.push('\n');

    out.push_str("Available products:\n");
    header(&mut out, &["name", "cost", "available"]);
    for product in Product::ALL {
        row(
            &mut out,
            &[
                &upper(product.name()),
                &product.cost().to_string(),
                &machine.inventory().get(product).to_string(),
            ],
        );
    }
    out.push('\n');

    out.push_str(
        "To interact with the machine, type:\n\
         insert $weight $size : to insert coin\n\
         return               : to return inserted coins\n\
         select $productName  : to buy product\n\
         take product         : to take bought product\n\
         take change          : to take change\n\
         exit                 : to exit program\n",
    );
    out
}

/// What the customer finds in the change tray.
pub fn render_change_tray(tray: &Tally<Coin>) -> String {
    let mut out = String::from("Change:\n");
    header(&mut out, &["name", "coins"]);
    for (coin, count) in tray.non_zero() {
        let name = if coin.is_recognized() {
            upper(coin.name())
        } else {
            "REJECTED".to_owned()
        };
        row(&mut out, &[&name, &count.to_string()]);
    }
    out
}

/// What the customer finds in the product tray.
pub fn render_product_tray(tray: &Tally<Product>) -> String {
    let mut out = String::from("Bought products:\n");
    header(&mut out, &["name", "cost", "bought"]);
    for (product, count) in tray.non_zero() {
        row(
            &mut out,
            &[&upper(product.name()), &product.cost().to_string(), &count.to_string()],
        );
    }
    out
}

fn header(out: &mut String, columns: &[&str]) {
    row(out, columns);
}

fn row(out: &mut String, cells: &[&str]) {
    for cell in cells {
        out.push_str(&format!("{cell:<COL$}"));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
}

fn upper(name: &str) -> String {
    name.to_ascii_uppercase()
}
