use crate::core_error::Result;
use crate::core_log::WireObserver;
use crate::core_network::with_timeout;
use crate::core_protocol::{decode, Command, FtpCommand, ProtocolError, Reply};
use log::{debug, trace};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// The command connection of one session.
///
/// Every method takes `&mut self`, so at most one command is ever in flight.
pub struct ControlChannel {
    stream: BufReader<TcpStream>,
    timeout: Duration,
    observer: Option<Box<dyn WireObserver>>,
}

impl ControlChannel {
    /// Connects to `host:port` and consumes the greeting, which must be a 2xx reply.
    pub async fn open(
        host: &str,
        port: u16,
        timeout: Duration,
        observer: Option<Box<dyn WireObserver>>,
    ) -> Result<(Self, Reply)> {
        debug!("Connecting to {}:{}", host, port);
        let stream = with_timeout(timeout, "connect", TcpStream::connect((host, port))).await?;
        if let Ok(peer) = stream.peer_addr() {
            debug!("Control connection established with {}", peer);
        }

        let mut channel = Self {
            stream: BufReader::new(stream),
            timeout,
            observer,
        };

        let greeting = channel.read_reply().await?;
        if !greeting.is_success() {
            return Err(ProtocolError::Greeting(greeting.code).into());
        }
        Ok((channel, greeting))
    }

    pub async fn send(&mut self, command: &Command) -> Result<()> {
        let line = command.to_line();
        let shown = line.trim_end_matches(&['\r', '\n'][..]);
        if command.verb == FtpCommand::PASS {
            trace!("CC OUT: PASS ****");
        } else {
            trace!("CC OUT: {}", shown);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.sent(shown);
        }

        let timeout = self.timeout;
        let stream = self.stream.get_mut();
        with_timeout(timeout, "send command", async {
            stream.write_all(line.as_bytes()).await?;
            stream.flush().await
        })
        .await?;
        Ok(())
    }

    /// Reads exactly one reply line.
    pub async fn read_reply(&mut self) -> Result<Reply> {
        let mut raw = Vec::new();
        let read = with_timeout(
            self.timeout,
            "read reply",
            self.stream.read_until(b'\n', &mut raw),
        )
        .await?;
        if read == 0 {
            return Err(ProtocolError::ConnectionClosed.into());
        }

        let line = String::from_utf8_lossy(&raw);
        let shown = line.trim_end_matches(&['\r', '\n'][..]);
        trace!("CC IN: {}", shown);
        if let Some(observer) = self.observer.as_mut() {
            observer.received(shown);
        }

        Ok(decode(&line)?)
    }

    /// One blocking round trip: write the command, read its reply.
    pub async fn execute(&mut self, command: &Command) -> Result<Reply> {
        self.send(command).await?;
        self.read_reply().await
    }

    /// Closes the write side and releases the socket. Errors are ignored.
    pub async fn shutdown(mut self) {
        let timeout = self.timeout;
        let stream = self.stream.get_mut();
        if let Err(e) = with_timeout(timeout, "shutdown", stream.shutdown()).await {
            trace!("Control connection shutdown: {}", e);
        }
    }
}
