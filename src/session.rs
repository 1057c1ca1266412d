use crate::config::SessionOptions;
use crate::core_error::{FtpError, Result};
use crate::core_log::{ConsoleObserver, WireObserver};
use crate::core_network::ControlChannel;
use crate::core_protocol::{
    parse_passive_reply, Command, Endpoint, FtpCommand, ProtocolError, Reply,
};
use crate::core_url::FtpUrl;
use crate::constants::REPLY_ENTERING_PASSIVE_MODE;
use log::{debug, warn};

/// Transfer parameters negotiated by `set_transfer_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferParams {
    pub type_: char,     // I (binary image)
    pub mode: char,      // S (stream)
    pub structure: char, // F (file)
}

impl TransferParams {
    pub const BINARY_STREAM_FILE: TransferParams = TransferParams {
        type_: 'I',
        mode: 'S',
        structure: 'F',
    };
}

/// One control connection to one server.
///
/// Created by `connect`, released by `close`. The data connection of a transfer
/// belongs to the operation that opened it, never to the session.
pub struct FtpSession {
    pub(crate) control: ControlChannel,
    pub(crate) options: SessionOptions,
    greeting: Reply,
    authenticated: bool,
    transfer: Option<TransferParams>,
}

impl FtpSession {
    /// Connects and reads the greeting. In verbose mode wire traffic is echoed on stdout.
    pub async fn connect(host: &str, port: u16, options: SessionOptions) -> Result<Self> {
        let observer: Option<Box<dyn WireObserver>> = if options.verbose {
            Some(Box::new(ConsoleObserver))
        } else {
            None
        };
        Self::connect_with_observer(host, port, options, observer).await
    }

    pub async fn connect_with_observer(
        host: &str,
        port: u16,
        options: SessionOptions,
        observer: Option<Box<dyn WireObserver>>,
    ) -> Result<Self> {
        let (control, greeting) = ControlChannel::open(host, port, options.timeout, observer).await?;
        debug!("Connected to {}:{} ({})", host, port, greeting);
        Ok(Self {
            control,
            options,
            greeting,
            authenticated: false,
            transfer: None,
        })
    }

    /// Connects, logs in and sets the transfer mode for the target of `url`.
    ///
    /// If any step after the connect fails, the session is closed before the error is returned.
    pub async fn open(url: &FtpUrl, options: SessionOptions) -> Result<Self> {
        let mut session = Self::connect(&url.host, url.port, options).await?;
        match session.prepare(&url.user, &url.password).await {
            Ok(()) => Ok(session),
            Err(e) => {
                session.close().await;
                Err(e)
            }
        }
    }

    async fn prepare(&mut self, user: &str, password: &str) -> Result<()> {
        self.authenticate(user, password).await?;
        self.set_transfer_mode().await
    }

    /// USER, then PASS only when the server asks for it with a 3xx reply.
    pub async fn authenticate(&mut self, user: &str, password: &str) -> Result<()> {
        let reply = self
            .control
            .execute(&Command::with_arg(FtpCommand::USER, user))
            .await?;

        if reply.is_success() {
            debug!("Logged in as {} without password", user);
        } else if reply.is_intermediate() {
            let reply = self
                .control
                .execute(&Command::with_arg(FtpCommand::PASS, password))
                .await?;
            if !reply.is_success() {
                return Err(ProtocolError::unexpected("PASS", reply.code).into());
            }
            debug!("Logged in as {}", user);
        } else {
            return Err(ProtocolError::unexpected("USER", reply.code).into());
        }

        self.authenticated = true;
        Ok(())
    }

    /// TYPE I, MODE S, STRU F. Must succeed before any data transfer.
    pub async fn set_transfer_mode(&mut self) -> Result<()> {
        let params = TransferParams::BINARY_STREAM_FILE;
        let steps = [
            (FtpCommand::TYPE, params.type_, "TYPE I"),
            (FtpCommand::MODE, params.mode, "MODE S"),
            (FtpCommand::STRU, params.structure, "STRU F"),
        ];

        for (verb, value, name) in steps {
            let reply = self
                .control
                .execute(&Command::with_arg(verb, value.to_string()))
                .await?;
            if !reply.is_success() {
                return Err(ProtocolError::unexpected(name, reply.code).into());
            }
        }

        self.transfer = Some(params);
        Ok(())
    }

    /// PASV; only an exact 227 reply is accepted.
    pub async fn request_passive(&mut self) -> Result<Endpoint> {
        let reply = self.control.execute(&Command::new(FtpCommand::PASV)).await?;
        if reply.code != REPLY_ENTERING_PASSIVE_MODE {
            return Err(ProtocolError::unexpected("PASV", reply.code).into());
        }
        let endpoint = parse_passive_reply(&reply.text)?;
        debug!("Passive endpoint {}", endpoint);
        Ok(endpoint)
    }

    /// Sends QUIT and releases the connection. Never fails.
    pub async fn close(mut self) {
        match self.control.execute(&Command::new(FtpCommand::QUIT)).await {
            Ok(reply) => debug!("QUIT: {}", reply),
            Err(e) => warn!("Ignoring error while closing session: {}", e),
        }
        self.control.shutdown().await;
    }

    pub fn greeting(&self) -> &Reply {
        &self.greeting
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn transfer_params(&self) -> Option<TransferParams> {
        self.transfer
    }

    pub(crate) fn require_transfer_mode(&self) -> Result<()> {
        match self.transfer {
            Some(_) => Ok(()),
            None => Err(FtpError::Protocol(ProtocolError::TransferModeNotSet)),
        }
    }
}
