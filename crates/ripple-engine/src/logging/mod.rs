//! Logging setup.
//!
//! Diagnostics flow through the `log` facade; `env_logger` is the only backend.
//! The fps line printed by the runtime is program output and bypasses this.

mod init;

pub use init::{init_logging, LoggingConfig};
