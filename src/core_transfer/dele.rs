use crate::core_error::Result;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;

impl FtpSession {
    /// Deletes a remote file.
    pub async fn delete_file(&mut self, path: &str) -> Result<()> {
        let reply = self
            .expect_success(&Command::with_arg(FtpCommand::DELE, path))
            .await?;
        debug!("DELE {}: {}", path, reply);
        Ok(())
    }
}
