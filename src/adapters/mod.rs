//! Adapters: concrete implementations of the port traits and the
//! console front end.
//!
//! | Adapter        | Implements   | Connects to            |
//! |----------------|--------------|------------------------|
//! | `config_file`  | ConfigPort   | JSON file on disk      |
//! | `console`      | (front end)  | stdin / stdout text    |
//! | `log_sink`     | EventSink    | `log` facade           |

pub mod config_file;
pub mod console;
pub mod log_sink;
