use crate::core_error::{FtpError, Result};
use crate::core_network::DataConnection;
use crate::core_protocol::{Command, FtpCommand};
use crate::session::FtpSession;
use log::debug;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

impl FtpSession {
    /// RETR into `sink`, chunk by chunk as bytes arrive. Returns the byte count.
    pub async fn retrieve_file<W>(&mut self, remote_path: &str, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let data = self
            .open_transfer(&Command::with_arg(FtpCommand::RETR, remote_path))
            .await?;
        self.receive_into(data, sink).await
    }

    /// RETR into a local file. The file is only created once the server has
    /// accepted the request, so a refused RETR leaves nothing behind.
    pub async fn download_file(&mut self, remote_path: &str, local_path: &Path) -> Result<u64> {
        let data = self
            .open_transfer(&Command::with_arg(FtpCommand::RETR, remote_path))
            .await?;

        let mut file = match File::create(local_path).await {
            Ok(file) => file,
            Err(e) => {
                data.close().await;
                return Err(FtpError::local_file(local_path, e));
            }
        };
        debug!("Downloading {} to {}", remote_path, local_path.display());
        self.receive_into(data, &mut file).await
    }

    async fn receive_into<W>(&mut self, mut data: DataConnection, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let copied = match pump(&mut data, sink, self.options.buffer_size).await {
            Ok(copied) => copied,
            Err(e) => {
                data.close().await;
                return Err(e);
            }
        };
        self.finish_transfer(FtpCommand::RETR, data).await?;
        debug!("RETR received {} bytes", copied);
        Ok(copied)
    }
}

async fn pump<W>(data: &mut DataConnection, sink: &mut W, buffer_size: usize) -> Result<u64>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = vec![0u8; buffer_size];
    let mut copied = 0u64;
    loop {
        let n = data.read_chunk(&mut buf).await?;
        if n == 0 {
            break;
        }
        sink.write_all(&buf[..n]).await.map_err(FtpError::LocalIo)?;
        copied += n as u64;
    }
    sink.flush().await.map_err(FtpError::LocalIo)?;
    Ok(copied)
}
