use crate::core_protocol::error::ProtocolError;
use std::fmt;

/// One reply line read from the control connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: u16,
    pub text: String,
}

impl Reply {
    pub fn new(code: u16, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn is_intermediate(&self) -> bool {
        (300..400).contains(&self.code)
    }

    /// 4xx and 5xx replies.
    pub fn is_failure(&self) -> bool {
        self.code >= crate::constants::REPLY_FAILURE_THRESHOLD
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:03}", self.code)
        } else {
            write!(f, "{:03} {}", self.code, self.text)
        }
    }
}

/// Decodes a single reply line of the form `CODE[ TEXT]`.
///
/// Trailing CR/LF characters are stripped first. The code must be exactly three
/// decimal digits; any value 0-999 is accepted here, classifying it is up to the caller.
pub fn decode(raw: &str) -> Result<Reply, ProtocolError> {
    let line = raw.trim_end_matches(&['\r', '\n'][..]);
    if line.is_empty() {
        return Err(ProtocolError::EmptyReply);
    }

    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return Err(ProtocolError::MalformedReply(line.to_string()));
    }

    let code = bytes[..3]
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));

    // The three leading bytes are ASCII, so both offsets are char boundaries.
    let text = match line[3..].strip_prefix(' ') {
        Some(rest) => rest,
        None => &line[3..],
    };

    Ok(Reply::new(code, text))
}
