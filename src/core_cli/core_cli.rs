use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "rouilleftp",
    version,
    about = "A FTP client written in Rust."
)]
pub struct Cli {
    /// Echo every command and reply exchanged with the server
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List a remote directory
    Ls { url: String },
    /// Create a remote directory
    Mkdir { url: String },
    /// Delete a remote file
    Rm { url: String },
    /// Remove a remote directory
    Rmdir { url: String },
    /// Copy between a local path and an FTP URL (either direction)
    Cp { src: String, dst: String },
    /// Like cp, then delete the source
    Mv { src: String, dst: String },
}
