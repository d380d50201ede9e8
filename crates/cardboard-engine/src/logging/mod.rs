//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only talks to
//! the `log` facade; the backend is installed here.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_TAG};
