pub mod config;
pub mod constants;
pub mod core_cli;
pub mod core_error;
pub mod core_log;
pub mod core_network;
pub mod core_protocol;
pub mod core_transfer;
pub mod core_url;
pub mod session;

pub use config::{Config, SessionOptions};
pub use core_error::{FtpError, Result};
pub use session::{FtpSession, TransferParams};
