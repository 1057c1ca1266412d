// src/constants.rs

use std::time::Duration;

pub const DEFAULT_FTP_PORT: u16 = 21;
pub const DEFAULT_USER: &str = "anonymous";
pub const DEFAULT_PASSWORD: &str = "";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_TRANSFER_BUFFER_SIZE: usize = 4096;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/rouilleftp.conf";

pub const FTP_URL_PREFIX: &str = "ftp://";

// Reply codes the session engine checks for explicitly.
pub const REPLY_ENTERING_PASSIVE_MODE: u16 = 227;
// First code of the failure classes (4xx transient, 5xx permanent).
pub const REPLY_FAILURE_THRESHOLD: u16 = 400;
