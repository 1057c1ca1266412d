// Caller-facing operations: each one opens a session, does its work and
// closes the session on every exit path.
use crate::config::SessionOptions;
use crate::core_cli::Commands;
use crate::core_error::{FtpError, Result};
use crate::core_url::{is_ftp_url, parse_ftp_url, FtpUrl};
use crate::session::FtpSession;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

pub async fn run(command: Commands, options: SessionOptions) -> Result<()> {
    match command {
        Commands::Ls { url } => cmd_ls(&url, options).await,
        Commands::Mkdir { url } => cmd_mkdir(&url, options).await,
        Commands::Rm { url } => cmd_rm(&url, options).await,
        Commands::Rmdir { url } => cmd_rmdir(&url, options).await,
        Commands::Cp { src, dst } => cmd_cp(&src, &dst, options).await,
        Commands::Mv { src, dst } => cmd_mv(&src, &dst, options).await,
    }
}

/// Prints the listing of the URL's directory on stdout, as sent by the server.
pub async fn cmd_ls(url: &str, options: SessionOptions) -> Result<()> {
    let listing = fetch_listing(url, options).await?;
    let mut out = std::io::stdout().lock();
    out.write_all(listing.as_bytes())
        .and_then(|_| out.flush())
        .map_err(FtpError::LocalIo)
}

/// Same as `cmd_ls` but hands the listing back instead of printing it.
pub async fn fetch_listing(url: &str, options: SessionOptions) -> Result<String> {
    let url = parse_ftp_url(url)?;
    let path = if url.path.is_empty() {
        None
    } else {
        Some(url.path.as_str())
    };

    let mut session = FtpSession::open(&url, options).await?;
    let result = session.list_directory(path).await;
    session.close().await;
    result
}

pub async fn cmd_mkdir(url: &str, options: SessionOptions) -> Result<()> {
    let url = parse_ftp_url(url)?;
    let mut session = FtpSession::open(&url, options).await?;
    let result = session.make_directory(&url.path).await;
    session.close().await;
    result
}

pub async fn cmd_rm(url: &str, options: SessionOptions) -> Result<()> {
    let url = parse_ftp_url(url)?;
    let mut session = FtpSession::open(&url, options).await?;
    let result = session.delete_file(&url.path).await;
    session.close().await;
    result
}

pub async fn cmd_rmdir(url: &str, options: SessionOptions) -> Result<()> {
    let url = parse_ftp_url(url)?;
    let mut session = FtpSession::open(&url, options).await?;
    let result = session.remove_directory(&url.path).await;
    session.close().await;
    result
}

/// Direction of a cp/mv, decided by which argument is the FTP URL.
#[derive(Debug, PartialEq, Eq)]
pub enum Transfer {
    Download { remote: FtpUrl, local: PathBuf },
    Upload { local: PathBuf, remote: FtpUrl },
}

/// Exactly one of `src`/`dst` must be an FTP URL.
pub fn resolve_transfer(verb: &str, src: &str, dst: &str) -> Result<Transfer> {
    match (is_ftp_url(src), is_ftp_url(dst)) {
        (true, false) => Ok(Transfer::Download {
            remote: parse_ftp_url(src)?,
            local: PathBuf::from(dst),
        }),
        (false, true) => Ok(Transfer::Upload {
            local: PathBuf::from(src),
            remote: parse_ftp_url(dst)?,
        }),
        _ => Err(FtpError::InvalidArguments(format!(
            "{} requires exactly one FTP URL and one local path",
            verb
        ))),
    }
}

pub async fn cmd_cp(src: &str, dst: &str, options: SessionOptions) -> Result<()> {
    match resolve_transfer("cp", src, dst)? {
        Transfer::Download { remote, local } => download(&remote, &local, false, options).await,
        Transfer::Upload { local, remote } => upload(&local, &remote, options).await,
    }
}

pub async fn cmd_mv(src: &str, dst: &str, options: SessionOptions) -> Result<()> {
    match resolve_transfer("mv", src, dst)? {
        Transfer::Download { remote, local } => download(&remote, &local, true, options).await,
        Transfer::Upload { local, remote } => {
            upload(&local, &remote, options).await?;
            tokio::fs::remove_file(&local)
                .await
                .map_err(|e| FtpError::local_file(&local, e))?;
            info!("Removed local source {}", local.display());
            Ok(())
        }
    }
}

async fn download(
    remote: &FtpUrl,
    local: &Path,
    delete_source: bool,
    options: SessionOptions,
) -> Result<()> {
    let mut session = FtpSession::open(remote, options).await?;
    let result = async {
        let bytes = session.download_file(&remote.path, local).await?;
        debug!("Downloaded {} bytes from {}", bytes, remote);
        if delete_source {
            session.delete_file(&remote.path).await?;
        }
        Ok::<(), FtpError>(())
    }
    .await;
    session.close().await;
    result
}

async fn upload(local: &Path, remote: &FtpUrl, options: SessionOptions) -> Result<()> {
    let is_file = tokio::fs::metadata(local)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(FtpError::InvalidArguments(format!(
            "Local file not found: {}",
            local.display()
        )));
    }

    let mut session = FtpSession::open(remote, options).await?;
    let result = session.upload_file(local, &remote.path).await;
    session.close().await;
    let bytes = result?;
    debug!("Uploaded {} bytes to {}", bytes, remote);
    Ok(())
}
