//! Logger installation. Code everywhere else only uses the `log` macros.

mod init;

pub use init::{init_logging, LoggingConfig};
