//! Fuzz target: `console::parse_command`
//!
//! Feeds arbitrary UTF-8 lines to the console parser and, whenever a line
//! parses, applies it to a machine.  Neither step may panic, and a line
//! that fails to parse must never reach the machine.
//!
//! cargo fuzz run fuzz_console_parse

#![no_main]

use coinvend::adapters::console::{self, ConsoleCommand};
use coinvend::app::service::AppService;
use coinvend::config::MachineConfig;
use coinvend::machine::VendingMachine;
use libfuzzer_sys::fuzz_target;

struct NullSink;

impl coinvend::app::ports::EventSink for NullSink {
    fn emit(&mut self, _event: &coinvend::app::events::AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let mut app = AppService::new(VendingMachine::from_config(&MachineConfig::default()));
    let mut sink = NullSink;

    for line in text.lines() {
        let before = app.snapshot();
        match console::parse_command(line) {
            Ok(ConsoleCommand::App(cmd)) => app.handle_command(cmd, &mut sink),
            Ok(ConsoleCommand::Exit) => break,
            Err(_) => assert_eq!(app.snapshot(), before, "rejected line changed the machine"),
        }
        let _ = console::render_status(app.machine());
    }
});
