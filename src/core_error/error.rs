// Crate-wide error type, one variant per failure kind
use crate::core_protocol::ProtocolError;
use crate::core_url::UrlParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FtpError {
    /// Socket-level connect/read/write failure, timeouts included.
    #[error("Connection error: {0}")]
    Connection(#[from] io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid FTP URL: {0}")]
    UrlParse(#[from] UrlParseError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Local sink or source failed while streaming a transfer.
    #[error("Local I/O error: {0}")]
    LocalIo(#[source] io::Error),

    #[error("Local file error on {path:?}: {source}")]
    LocalFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FtpError>;

impl FtpError {
    pub fn local_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FtpError::LocalFile {
            path: path.into(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FtpError::Connection(e) if e.kind() == io::ErrorKind::TimedOut)
    }
}
