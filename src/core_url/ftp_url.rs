use crate::constants::{DEFAULT_FTP_PORT, DEFAULT_PASSWORD, DEFAULT_USER, FTP_URL_PREFIX};
use crate::core_url::error::UrlParseError;
use log::debug;
use percent_encoding::percent_decode_str;
use std::fmt;
use url::{Host, Url};

/// Connection target and remote path extracted from `ftp://[USER[:PASSWORD]@]HOST[:PORT]/PATH`.
#[derive(Clone, PartialEq, Eq)]
pub struct FtpUrl {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    /// Either empty or starting with exactly one `/`.
    pub path: String,
}

// Keeps the password out of logs.
impl fmt::Debug for FtpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpUrl")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .finish()
    }
}

impl fmt::Display for FtpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ftp://{}@{}:{}{}", self.user, self.host, self.port, self.path)
    }
}

pub fn is_ftp_url(value: &str) -> bool {
    value.starts_with(FTP_URL_PREFIX)
}

pub fn parse_ftp_url(input: &str) -> Result<FtpUrl, UrlParseError> {
    if !is_ftp_url(input) {
        return Err(UrlParseError::MissingScheme(input.to_string()));
    }

    // Only the authority goes through `url`; its path normalisation (dot segments,
    // backslashes, stripped tabs) would change the remote path.
    let rest = &input[FTP_URL_PREFIX.len()..];
    let (authority, raw_path) = match rest.find('/') {
        Some(slash) => (&rest[..slash], &rest[slash..]),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return Err(UrlParseError::MissingHost);
    }
    let hostport = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let port = explicit_port(hostport)?.unwrap_or(DEFAULT_FTP_PORT);

    let url = Url::parse(&format!("{}{}/", FTP_URL_PREFIX, authority)).map_err(|e| match e {
        url::ParseError::EmptyHost => UrlParseError::MissingHost,
        url::ParseError::InvalidPort => UrlParseError::InvalidPort(hostport.to_string()),
        other => UrlParseError::Malformed(other.to_string()),
    })?;

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(UrlParseError::MissingHost),
    };

    let (user, password) = if authority.contains('@') {
        let user = decode(url.username());
        if user.is_empty() {
            return Err(UrlParseError::EmptyUsername);
        }
        let password = url.password().map(decode).unwrap_or_default();
        (user, password)
    } else {
        (DEFAULT_USER.to_string(), DEFAULT_PASSWORD.to_string())
    };

    let ftp_url = FtpUrl {
        user,
        password,
        host,
        port,
        path: normalize_path(&decode(raw_path)),
    };
    debug!("Parsed {} as {:?}", input, ftp_url);
    Ok(ftp_url)
}

/// Returns the port written after the last `:` of the host part, if any.
fn explicit_port(hostport: &str) -> Result<Option<u16>, UrlParseError> {
    let Some((host, port_part)) = hostport.rsplit_once(':') else {
        return Ok(None);
    };
    // Colon inside a bracketed IPv6 literal, no port given.
    if host.starts_with('[') && !host.ends_with(']') {
        return Ok(None);
    }
    if port_part.is_empty() {
        return Err(UrlParseError::InvalidPort(String::new()));
    }
    let port: u32 = port_part
        .parse()
        .map_err(|_| UrlParseError::InvalidPort(port_part.to_string()))?;
    if !(1..=65535).contains(&port) {
        return Err(UrlParseError::PortOutOfRange(port));
    }
    Ok(Some(port as u16))
}

fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
