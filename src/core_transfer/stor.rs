use crate::core_error::{FtpError, Result};
use crate::core_network::DataConnection;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};

impl FtpSession {
    /// STOR from `source`, sent in chunks of the configured buffer size until the
    /// source is exhausted. Returns the byte count.
    pub async fn store_file<R>(&mut self, source: &mut R, remote_path: &str) -> Result<u64>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let mut data = self
            .open_transfer(&Command::with_arg(FtpCommand::STOR, remote_path))
            .await?;

        let sent = match send_all(&mut data, source, self.options.buffer_size).await {
            Ok(sent) => sent,
            Err(e) => {
                data.close().await;
                return Err(e);
            }
        };
        self.finish_transfer(FtpCommand::STOR, data).await?;
        debug!("STOR {} sent {} bytes", remote_path, sent);
        Ok(sent)
    }

    /// STOR from a local file, opened before any network traffic.
    pub async fn upload_file(&mut self, local_path: &Path, remote_path: &str) -> Result<u64> {
        let mut file = File::open(local_path)
            .await
            .map_err(|e| FtpError::local_file(local_path, e))?;
        debug!("Uploading {} to {}", local_path.display(), remote_path);
        self.store_file(&mut file, remote_path).await
    }
}

async fn send_all<R>(data: &mut DataConnection, source: &mut R, buffer_size: usize) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = vec![0u8; buffer_size];
    let mut sent = 0u64;
    loop {
        let n = source.read(&mut buf).await.map_err(FtpError::LocalIo)?;
        if n == 0 {
            break;
        }
        data.write_all(&buf[..n]).await?;
        sent += n as u64;
    }
    // The server only sees end of file once the write side is shut down.
    data.shutdown().await?;
    Ok(sent)
}
