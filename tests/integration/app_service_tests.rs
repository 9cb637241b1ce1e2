//! Integration tests for the ConfigPort → AppService → EventSink pipeline.

use coinvend::app::commands::AppCommand;
use coinvend::app::events::AppEvent;
use coinvend::app::ports::{ConfigError, ConfigPort};
use coinvend::app::service::AppService;
use coinvend::coin::Coin;
use coinvend::config::MachineConfig;
use coinvend::machine::{Status, VendingMachine};
use coinvend::product::Product;
use coinvend::tally::Tally;

use crate::mock_sink::{MockConfig, RecordingSink};

const QUARTER: AppCommand = AppCommand::InsertCoin { weight: 2500, size: 250 };
const DIME: AppCommand = AppCommand::InsertCoin { weight: 1000, size: 100 };
const NICKEL: AppCommand = AppCommand::InsertCoin { weight: 500, size: 50 };

fn boot(port: &impl ConfigPort) -> (AppService, RecordingSink) {
    let config = port.load().unwrap_or_default();
    let mut app = AppService::new(VendingMachine::from_config(&config));
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, sink)
}

#[test]
fn start_reports_configured_stock() {
    let mut config = MachineConfig::default();
    config.coins.dimes = 3;
    config.products.cola = 5;
    let (app, sink) = boot(&MockConfig::with(config));

    let [AppEvent::Started(snap)] = sink.events.as_slice() else {
        panic!("expected a single Started event, got {:?}", sink.events);
    };
    assert_eq!(snap.status, Status::AwaitingCoin);
    assert_eq!(snap.treasury.get(Coin::Dime), 3);
    assert_eq!(snap.inventory.get(Product::Cola), 5);
    assert_eq!(app.commands_handled(), 0);
}

#[test]
fn failed_config_falls_back_to_factory_stock() {
    for err in [
        ConfigError::NotFound,
        ConfigError::Corrupted("bad json".into()),
        ConfigError::IoError("denied".into()),
    ] {
        let (app, _) = boot(&MockConfig::failing(err));
        assert_eq!(app.machine().inventory().get(Product::Cola), 0);
        assert_eq!(app.machine().inventory().get(Product::Candy), 2);
        assert_eq!(app.machine().coins(Coin::Quarter), 1);
        assert_eq!(app.machine().coins(Coin::Nickel), 1);
    }
}

#[test]
fn candy_purchase_emits_sale_then_collections() {
    let mut config = MachineConfig::default();
    config.coins.dimes = 2;
    let (mut app, mut sink) = boot(&MockConfig::with(config));
    sink.clear();

    for cmd in [QUARTER, QUARTER, QUARTER] {
        app.handle_command(cmd, &mut sink);
    }
    app.handle_command(AppCommand::SelectProduct(Product::Candy), &mut sink);
    app.handle_command(AppCommand::TakeProduct, &mut sink);
    app.handle_command(AppCommand::TakeChange, &mut sink);

    let dime = Tally::from_pairs([(Coin::Dime, 1)]);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::CoinAccepted { coin: Coin::Quarter, inserted_value: 25 },
            AppEvent::StatusChanged { from: Status::AwaitingCoin, to: Status::CoinInserted },
            AppEvent::CoinAccepted { coin: Coin::Quarter, inserted_value: 50 },
            AppEvent::CoinAccepted { coin: Coin::Quarter, inserted_value: 75 },
            AppEvent::Sale { product: Product::Candy, change: dime },
            AppEvent::StatusChanged { from: Status::CoinInserted, to: Status::ProductDispensed },
            AppEvent::ProductCollected(Tally::from_pairs([(Product::Candy, 1)])),
            AppEvent::ChangeCollected(dime),
        ]
    );
    assert_eq!(app.machine().coins(Coin::Quarter), 4);
    assert_eq!(app.machine().coins(Coin::Dime), 1);
    assert_eq!(app.commands_handled(), 6);
}

#[test]
fn factory_stock_cannot_change_a_dime() {
    let (mut app, mut sink) = boot(&MockConfig::with(MachineConfig::default()));
    sink.clear();

    for cmd in [QUARTER, QUARTER, QUARTER] {
        app.handle_command(cmd, &mut sink);
    }
    app.handle_command(AppCommand::SelectProduct(Product::Candy), &mut sink);
    assert!(sink.events.contains(&AppEvent::SaleRefused {
        product: Product::Candy,
        status: Status::CannotMakeChange,
    }));

    sink.clear();
    app.handle_command(AppCommand::ReturnCoins, &mut sink);
    app.handle_command(AppCommand::ResetStatus, &mut sink);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::CoinsReturned(Tally::from_pairs([(Coin::Quarter, 3)])),
            AppEvent::StatusChanged { from: Status::CannotMakeChange, to: Status::AwaitingCoin },
        ]
    );
}

#[test]
fn rejected_object_lands_in_change_tray() {
    let (mut app, mut sink) = boot(&MockConfig::with(MachineConfig::default()));
    sink.clear();

    app.handle_command(AppCommand::InsertCoin { weight: 250, size: 19 }, &mut sink);
    assert_eq!(sink.events, vec![AppEvent::CoinRejected { weight: 250, size: 19 }]);
    assert_eq!(app.machine().status(), Status::AwaitingCoin);
    assert_eq!(app.machine().inserted_value(), 0);

    app.handle_command(AppCommand::TakeChange, &mut sink);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::ChangeCollected(Tally::from_pairs([(Coin::Unrecognized, 1)])))
    );
}

#[test]
fn refusals_settle_back_to_credit() {
    let (mut app, mut sink) = boot(&MockConfig::with(MachineConfig::default()));
    sink.clear();

    app.handle_command(DIME, &mut sink);
    app.handle_command(NICKEL, &mut sink);
    app.handle_command(AppCommand::SelectProduct(Product::Chips), &mut sink);
    app.handle_command(AppCommand::ResetStatus, &mut sink);

    assert_eq!(
        sink.transitions(),
        vec![
            (Status::AwaitingCoin, Status::CoinInserted),
            (Status::CoinInserted, Status::InsufficientFunds),
            (Status::InsufficientFunds, Status::CoinInserted),
        ]
    );
    assert_eq!(app.snapshot().inserted_value, 15);
}

#[test]
fn sold_out_before_change_search() {
    let (mut app, mut sink) = boot(&MockConfig::with(MachineConfig::default()));
    sink.clear();

    for _ in 0..4 {
        app.handle_command(QUARTER, &mut sink);
    }
    app.handle_command(AppCommand::SelectProduct(Product::Cola), &mut sink);
    assert_eq!(app.machine().status(), Status::SoldOut);
    assert_eq!(app.machine().inserted_value(), 100);
}
