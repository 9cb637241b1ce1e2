//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.

mod app_service_tests;
mod console_flow_tests;
mod mock_sink;
