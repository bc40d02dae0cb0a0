//! Logger setup.
//!
//! Everything in this crate logs through the `log` facade; this module only
//! decides where those records go. Binaries call [`init_logging`] once at
//! startup and libraries never touch it.

mod init;

pub use init::{LoggingConfig, init_logging};
