// Transfer operations of a session, one file per FTP verb.
//
// Data-bearing verbs (LIST, RETR, STOR) run in three phases:
//   1. PASV, open the data connection, send the verb and read the preliminary reply.
//      A reply >= 400 closes the data connection and fails; no final reply follows.
//   2. Move the bytes until end of stream (or end of the local source).
//   3. Close the data connection, then read the final reply. A reply >= 400 fails.
// The data connection is closed on every exit path before the operation returns.

pub mod dele;
pub mod list;
pub mod mkd;
pub mod retr;
pub mod rmd;
pub mod stor;

use crate::core_error::Result;
use crate::core_network::DataConnection;
use crate::core_protocol::{Command, FtpCommand, ProtocolError, Reply};
use crate::session::FtpSession;
use log::debug;

impl FtpSession {
    /// Phase 1: returns the open data connection once the preliminary reply is below 400.
    pub(crate) async fn open_transfer(&mut self, command: &Command) -> Result<DataConnection> {
        self.require_transfer_mode()?;
        let endpoint = self.request_passive().await?;
        let data = DataConnection::open(endpoint, self.options.timeout).await?;

        let reply = match self.control.execute(command).await {
            Ok(reply) => reply,
            Err(e) => {
                data.close().await;
                return Err(e);
            }
        };
        if reply.is_failure() {
            data.close().await;
            return Err(ProtocolError::unexpected(command.verb.as_str(), reply.code).into());
        }

        debug!("{} accepted: {}", command.verb, reply);
        Ok(data)
    }

    /// Phase 3: closes the data connection and reads the final reply.
    pub(crate) async fn finish_transfer(
        &mut self,
        verb: FtpCommand,
        data: DataConnection,
    ) -> Result<Reply> {
        data.close().await;
        let reply = self.control.read_reply().await?;
        if reply.is_failure() {
            return Err(ProtocolError::TransferFailed {
                command: verb.as_str().to_string(),
                code: reply.code,
            }
            .into());
        }
        debug!("{} completed: {}", verb, reply);
        Ok(reply)
    }

    /// Control-only round trip that must return a 2xx reply.
    pub(crate) async fn expect_success(&mut self, command: &Command) -> Result<Reply> {
        let reply = self.control.execute(command).await?;
        if !reply.is_success() {
            return Err(ProtocolError::unexpected(command.verb.as_str(), reply.code).into());
        }
        Ok(reply)
    }
}
