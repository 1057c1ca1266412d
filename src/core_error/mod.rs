pub mod error;
pub mod handler;

pub use error::{FtpError, Result};
pub use handler::report_error;
