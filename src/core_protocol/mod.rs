// Wire format of the control connection: commands out, replies in,
// plus the passive-mode address grammar.

pub mod command;
pub mod error;
pub mod pasv;
pub mod reply;

pub use command::{encode, Command, FtpCommand};
pub use error::ProtocolError;
pub use pasv::{parse_passive_reply, Endpoint};
pub use reply::{decode, Reply};
