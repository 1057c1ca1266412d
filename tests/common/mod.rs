// Scripted single-connection FTP server used by the integration tests.
#![allow(dead_code)]

use rouilleftp::config::SessionOptions;
use rouilleftp::core_log::WireObserver;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub fn options() -> SessionOptions {
    SessionOptions {
        timeout: Duration::from_secs(5),
        buffer_size: 4096,
        verbose: false,
    }
}

/// Accepts one control connection on an ephemeral port and runs `script` on it.
pub async fn spawn_server<F, Fut>(script: F) -> (u16, JoinHandle<()>)
where
    F: FnOnce(ServerConn) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        script(ServerConn::new(stream)).await;
    });
    (port, handle)
}

pub struct ServerConn {
    stream: BufReader<TcpStream>,
}

impl ServerConn {
    fn new(stream: TcpStream) -> Self {
        Self {
            stream: BufReader::new(stream),
        }
    }

    pub async fn reply(&mut self, line: &str) {
        let stream = self.stream.get_mut();
        stream.write_all(line.as_bytes()).await.unwrap();
        stream.write_all(b"\r\n").await.unwrap();
        stream.flush().await.unwrap();
    }

    /// Next command line without CRLF, `None` once the client has hung up.
    pub async fn read_command(&mut self) -> Option<String> {
        let mut line = String::new();
        let n = self.stream.read_line(&mut line).await.unwrap();
        if n == 0 {
            return None;
        }
        Some(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub async fn expect(&mut self, expected: &str) {
        let got = self.read_command().await;
        assert_eq!(got.as_deref(), Some(expected));
    }

    /// Greeting, anonymous USER/PASS and the TYPE/MODE/STRU sequence.
    pub async fn welcome(&mut self, user: &str, password: &str) {
        self.reply("220 rouilleftp test server ready").await;
        self.expect(&format!("USER {}", user)).await;
        self.reply("331 Password required").await;
        if password.is_empty() {
            self.expect("PASS").await;
        } else {
            self.expect(&format!("PASS {}", password)).await;
        }
        self.reply("230 Logged in").await;
        self.expect("TYPE I").await;
        self.reply("200 Type set to I").await;
        self.expect("MODE S").await;
        self.reply("200 Mode set to S").await;
        self.expect("STRU F").await;
        self.reply("200 Structure set to F").await;
    }

    /// Answers PASV with a fresh listener and returns it.
    pub async fn passive(&mut self) -> TcpListener {
        self.expect("PASV").await;
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        self.reply(&pasv_reply(addr)).await;
        listener
    }

    pub async fn quit(&mut self) {
        self.expect("QUIT").await;
        self.reply("221 Goodbye").await;
    }
}

pub fn pasv_reply(addr: SocketAddr) -> String {
    let ip = match addr {
        SocketAddr::V4(v4) => v4.ip().octets(),
        SocketAddr::V6(_) => panic!("IPv4 only"),
    };
    format!(
        "227 Entering Passive Mode ({},{},{},{},{},{}).",
        ip[0],
        ip[1],
        ip[2],
        ip[3],
        addr.port() / 256,
        addr.port() % 256
    )
}

pub async fn read_all(stream: &mut TcpStream) -> Vec<u8> {
    let mut data = Vec::new();
    stream.read_to_end(&mut data).await.unwrap();
    data
}

/// Keeps every wire line for later inspection.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl WireObserver for RecordingObserver {
    fn sent(&mut self, line: &str) {
        self.lines.lock().unwrap().push(format!("--> {}", line));
    }

    fn received(&mut self, line: &str) {
        self.lines.lock().unwrap().push(format!("<-- {}", line));
    }
}
