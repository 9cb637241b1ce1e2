//! Console lines driven through the parser into a live AppService.

use coinvend::adapters::console::{self, ConsoleCommand};
use coinvend::app::commands::AppCommand;
use coinvend::app::service::AppService;
use coinvend::config::MachineConfig;
use coinvend::error::CommandError;
use coinvend::machine::VendingMachine;

use crate::mock_sink::RecordingSink;

/// Feed a session the way the binary does: settle the status, then apply
/// each line.  Returns the status line shown after every command.
fn run(app: &mut AppService, sink: &mut RecordingSink, lines: &[&str]) -> Vec<String> {
    let mut shown = Vec::new();
    for line in lines {
        match console::parse_command(line) {
            Ok(ConsoleCommand::App(cmd)) => app.handle_command(cmd, sink),
            Ok(ConsoleCommand::Exit) => break,
            Err(e) => shown.push(e.to_string()),
        }
        shown.push(console::render_status(app.machine()));
        app.handle_command(AppCommand::ResetStatus, sink);
    }
    shown
}

fn factory() -> AppService {
    AppService::new(VendingMachine::from_config(&MachineConfig::default()))
}

#[test]
fn exact_chips_session() {
    let mut app = factory();
    let mut sink = RecordingSink::new();
    let shown = run(
        &mut app,
        &mut sink,
        &["insert 2500 250", "INSERT 2500 250", "select chips", "take product"],
    );
    assert_eq!(shown, ["25", "50", "THANK YOU", "INSERT COIN"]);
    assert!(app.machine().product_tray().is_empty());
}

#[test]
fn bad_lines_do_not_touch_the_machine() {
    let mut app = factory();
    let mut sink = RecordingSink::new();
    let before = app.snapshot();
    let shown = run(
        &mut app,
        &mut sink,
        &["", "dance", "select gum", "insert 2500", "take coins"],
    );
    assert_eq!(app.snapshot(), before);
    assert!(sink.events.is_empty());
    assert_eq!(shown[0], CommandError::Empty.to_string());
    assert_eq!(shown[2], CommandError::UnknownCommand.to_string());
    assert_eq!(app.commands_handled(), 5);
}

#[test]
fn exit_stops_the_session() {
    let mut app = factory();
    let mut sink = RecordingSink::new();
    let shown = run(&mut app, &mut sink, &["insert 500 50", "exit", "insert 500 50"]);
    assert_eq!(shown, ["5"]);
    assert_eq!(app.machine().inserted_value(), 5);
}

#[test]
fn change_tray_screen_after_return() {
    let mut app = factory();
    let mut sink = RecordingSink::new();
    run(&mut app, &mut sink, &["insert 1000 100", "insert 1 1", "return"]);
    let screen = console::render_change_tray(app.machine().change_tray());
    assert_eq!(screen, "Change:\nname     coins\nDIME     1\nREJECTED 1\n");
}
