// Sockets of an FTP session: the long-lived control connection and the
// short-lived passive data connections.

pub mod control;
pub mod data;

pub use control::ControlChannel;
pub use data::DataConnection;

use std::future::Future;
use std::io;
use std::time::Duration;

/// Bounds a socket operation; an elapsed timer becomes an `io::ErrorKind::TimedOut` error.
pub(crate) async fn with_timeout<T, F>(duration: Duration, what: &str, fut: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("{} timed out after {}s", what, duration.as_secs_f32()),
        )),
    }
}
