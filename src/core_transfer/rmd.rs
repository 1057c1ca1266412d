use crate::core_error::Result;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;

impl FtpSession {
    /// Removes a remote directory, which most servers require to be empty.
    pub async fn remove_directory(&mut self, path: &str) -> Result<()> {
        let reply = self
            .expect_success(&Command::with_arg(FtpCommand::RMD, path))
            .await?;
        debug!("RMD {}: {}", path, reply);
        Ok(())
    }
}
