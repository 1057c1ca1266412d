use crate::core_network::with_timeout;
use crate::core_protocol::Endpoint;
use log::{debug, trace};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// A passive-mode data connection, owned by the transfer that opened it.
pub struct DataConnection {
    stream: TcpStream,
    endpoint: Endpoint,
    timeout: Duration,
}

impl DataConnection {
    pub async fn open(endpoint: Endpoint, timeout: Duration) -> io::Result<Self> {
        let stream = with_timeout(
            timeout,
            "data connect",
            TcpStream::connect(endpoint.socket_addr()),
        )
        .await?;
        debug!("Data connection opened to {}", endpoint);
        Ok(Self {
            stream,
            endpoint,
            timeout,
        })
    }

    /// Returns 0 once the server has half-closed the connection.
    pub async fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        with_timeout(self.timeout, "data read", self.stream.read(buf)).await
    }

    /// Reads until end of stream, `buffer_size` bytes at a time.
    pub async fn read_to_end(&mut self, buffer_size: usize) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        let mut buf = vec![0u8; buffer_size];
        loop {
            let n = self.read_chunk(&mut buf).await?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }
        trace!("Read {} bytes from {}", data.len(), self.endpoint);
        Ok(data)
    }

    pub async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        with_timeout(self.timeout, "data write", self.stream.write_all(data)).await
    }

    /// Signals end of data to the server (FIN), required after an upload.
    pub async fn shutdown(&mut self) -> io::Result<()> {
        with_timeout(self.timeout, "data shutdown", self.stream.shutdown()).await
    }

    /// Releases the connection; shutdown failures are only traced.
    pub async fn close(mut self) {
        if let Err(e) = self.shutdown().await {
            trace!("Data connection {} shutdown: {}", self.endpoint, e);
        }
        debug!("Data connection to {} closed", self.endpoint);
    }
}
