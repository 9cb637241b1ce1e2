//! CoinVend: interactive console entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  console (stdin/stdout)  LogEventSink   JsonConfigFile   │
//! │  (front end)             (EventSink)    (ConfigPort)     │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)               │      │
//! │  │  VendingMachine · coin identify · change search│      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use coinvend::adapters::config_file::JsonConfigFile;
use coinvend::adapters::console::{self, ConsoleCommand};
use coinvend::adapters::log_sink::LogEventSink;
use coinvend::app::commands::AppCommand;
use coinvend::app::ports::ConfigPort;
use coinvend::app::service::AppService;
use coinvend::config::MachineConfig;
use coinvend::machine::VendingMachine;

#[derive(Parser, Debug)]
#[command(name = "coinvend", version, about = "Coin-operated vending machine simulator")]
struct Args {
    /// JSON file with the initial coin and product stock.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `info`, `coinvend=debug`). Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ── 1. Logging (stderr, so the screen stays clean) ────────
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("CoinVend v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Stock the machine ──────────────────────────────────
    let config = match &args.config {
        Some(path) => {
            let port = JsonConfigFile::new(path);
            port.load().unwrap_or_else(|e| {
                warn!(
                    "Config load from {} failed ({}), using factory stock",
                    port.path().display(),
                    e
                );
                MachineConfig::default()
            })
        }
        None => MachineConfig::default(),
    };
    let mut app = AppService::new(VendingMachine::from_config(&config));
    let mut sink = LogEventSink::new();
    app.start(&mut sink);

    // ── 3. Console loop ───────────────────────────────────────
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    write!(out, "{}", console::render_start_screen(app.machine()))?;

    let mut lines = stdin.lock().lines();
    loop {
        writeln!(out, "{}", console::render_status(app.machine()))?;
        out.flush()?;
        app.handle_command(AppCommand::ResetStatus, &mut sink);

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading console input")?;

        match console::parse_command(&line) {
            Ok(ConsoleCommand::Exit) => break,
            Ok(ConsoleCommand::App(cmd)) => {
                match cmd {
                    AppCommand::TakeProduct => {
                        write!(out, "{}", console::render_product_tray(app.machine().product_tray()))?;
                    }
                    AppCommand::TakeChange => {
                        write!(out, "{}", console::render_change_tray(app.machine().change_tray()))?;
                    }
                    _ => {}
                }
                app.handle_command(cmd, &mut sink);
            }
            Err(e) => {
                info!("Rejected command {:?}: {}", line, e);
                writeln!(out, "{e}")?;
            }
        }
    }

    info!("Console closed after {} commands", app.commands_handled());
    Ok(())
}
