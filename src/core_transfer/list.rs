use crate::core_error::Result;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;

impl FtpSession {
    /// LIST. Returns the raw listing exactly as received, decoded as (lossy) UTF-8.
    ///
    /// `None` or an empty path lists the server's current directory.
    pub async fn list_directory(&mut self, path: Option<&str>) -> Result<String> {
        let command = match path {
            Some(path) => Command::with_arg(FtpCommand::LIST, path),
            None => Command::new(FtpCommand::LIST),
        };

        let mut data = self.open_transfer(&command).await?;
        let bytes = match data.read_to_end(self.options.buffer_size).await {
            Ok(bytes) => bytes,
            Err(e) => {
                data.close().await;
                return Err(e.into());
            }
        };
        self.finish_transfer(FtpCommand::LIST, data).await?;

        debug!("LIST returned {} bytes", bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
