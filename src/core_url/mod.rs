pub mod error;
pub mod ftp_url;

pub use error::UrlParseError;
pub use ftp_url::{is_ftp_url, parse_ftp_url, FtpUrl};
