use crate::core_error::error::FtpError;
use log::error;
use std::process::ExitCode;

impl FtpError {
    /// Process exit status reported by the command-line client.
    pub fn exit_code(&self) -> u8 {
        match self {
            FtpError::Connection(_) => 2,
            FtpError::Protocol(_) => 3,
            FtpError::UrlParse(_) => 4,
            FtpError::InvalidArguments(_) => 5,
            FtpError::LocalIo(_) | FtpError::LocalFile { .. } => 6,
        }
    }
}

/// Logs the failure, prints it on stderr and converts it into the exit status.
pub fn report_error(err: &FtpError) -> ExitCode {
    error!("{}", err);
    eprintln!("rouilleftp: {}", err);
    ExitCode::from(err.exit_code())
}
