// Protocol-level failures raised by the session engine
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Empty reply line")]
    EmptyReply,

    #[error("Control connection closed")]
    ConnectionClosed,

    #[error("Invalid FTP response: {0}")]
    MalformedReply(String),

    #[error("Greeting failed ({0})")]
    Greeting(u16),

    #[error("{command} failed ({code})")]
    UnexpectedReply { command: String, code: u16 },

    /// Final reply after the data connection closed reported a failure.
    #[error("{command} final failed ({code})")]
    TransferFailed { command: String, code: u16 },

    #[error("Bad PASV response: {0}")]
    MalformedPassive(String),

    #[error("Transfer mode not negotiated (TYPE/MODE/STRU must run before a data transfer)")]
    TransferModeNotSet,
}

impl ProtocolError {
    pub fn unexpected(command: impl Into<String>, code: u16) -> Self {
        ProtocolError::UnexpectedReply {
            command: command.into(),
            code,
        }
    }
}
