use std::io::Write;

/// Receives a copy of every line exchanged on the control connection.
///
/// Lines are passed without their CRLF terminator. Observers only watch the
/// traffic; nothing they do feeds back into the session.
pub trait WireObserver: Send {
    fn sent(&mut self, line: &str);
    fn received(&mut self, line: &str);
}

/// Echoes wire traffic on stdout, `-->` for commands and `<--` for replies.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl WireObserver for ConsoleObserver {
    fn sent(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "--> {}", line);
    }

    fn received(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "<-- {}", line);
    }
}
