use crate::core_protocol::error::ProtocolError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Address advertised by the server for the next data connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl Endpoint {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip, self.port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// Parses the text of a 227 reply, e.g. `Entering Passive Mode (h1,h2,h3,h4,p1,p2).`
///
/// The address is the bracketed list between the first `(` and the first `)` after it.
/// Every field must be an integer in 0-255 and the resulting port must not be zero.
pub fn parse_passive_reply(text: &str) -> Result<Endpoint, ProtocolError> {
    let start = text
        .find('(')
        .ok_or_else(|| ProtocolError::MalformedPassive(format!("missing '(' in {:?}", text)))?;
    let end = text[start + 1..]
        .find(')')
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| ProtocolError::MalformedPassive(format!("missing ')' in {:?}", text)))?;

    let inside = &text[start + 1..end];
    let parts: Vec<&str> = inside.split(',').collect();
    if parts.len() != 6 {
        return Err(ProtocolError::MalformedPassive(format!(
            "expected 6 fields, got {} in ({})",
            parts.len(),
            inside
        )));
    }

    let mut nums = [0u8; 6];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        let value: u32 = part.trim().parse().map_err(|_| {
            ProtocolError::MalformedPassive(format!("non-numeric field {:?}", part.trim()))
        })?;
        *slot = u8::try_from(value).map_err(|_| {
            ProtocolError::MalformedPassive(format!("field {} is out of range 0-255", value))
        })?;
    }

    let [h1, h2, h3, h4, p1, p2] = nums;
    let port = (u16::from(p1) << 8) | u16::from(p2);
    if port == 0 {
        return Err(ProtocolError::MalformedPassive(
            "advertised port is 0".to_string(),
        ));
    }

    Ok(Endpoint {
        ip: Ipv4Addr::new(h1, h2, h3, h4),
        port,
    })
}
