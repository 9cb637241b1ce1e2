//! Application core: the machine plus its reporting, zero I/O.
//!
//! The [`service::AppService`] drives the
//! [`VendingMachine`](crate::machine::VendingMachine) from
//! [`commands::AppCommand`]s and reports what happened as
//! [`events::AppEvent`]s through the **port traits** in [`ports`], so the
//! front end and logging stay outside the core.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
