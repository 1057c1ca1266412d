use crate::core_error::Result;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;

impl FtpSession {
    pub async fn make_directory(&mut self, path: &str) -> Result<()> {
        let reply = self
            .expect_success(&Command::with_arg(FtpCommand::MKD, path))
            .await?;
        debug!("MKD {}: {}", path, reply);
        Ok(())
    }
}
