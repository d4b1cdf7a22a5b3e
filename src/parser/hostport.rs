//! Parsers for `hostport` tokens.

use crate::error::{Error, ErrorKind};
use crate::parser::str::{find, find_split_hole};

/// Raw (not yet decoded) pieces of a `hostport` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HostPort<'a> {
    /// Host, without brackets.
    pub(crate) host: &'a str,
    /// Text after the port-separating colon, if the colon exists.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) port: Option<&'a str>,
}

/// Decomposes `hostport` into host and port token.
///
/// `[host]` and `[host]:port` are IPv6 literal forms; otherwise the host ends
/// at the first colon.
pub(crate) fn decompose_hostport(hostport: &str) -> Result<HostPort<'_>, Error> {
    let bracketed = match hostport.strip_prefix('[') {
        Some(v) => v,
        None => {
            return Ok(match find_split_hole(hostport, b':') {
                Some((host, port)) => HostPort {
                    host,
                    port: Some(port),
                },
                None => HostPort {
                    host: hostport,
                    port: None,
                },
            })
        }
    };
    let (host, after) =
        find_split_hole(bracketed, b']').ok_or_else(|| Error::new(ErrorKind::BadUrl))?;
    let port = match after.strip_prefix(':') {
        Some(port) => Some(port),
        None if after.is_empty() => None,
        None => return Err(Error::new(ErrorKind::BadUrl)),
    };
    Ok(HostPort { host, port })
}

/// Converts a decoded port token into a port number.
///
/// Leading whitespace and a sign are skipped, and the leading run of decimal
/// digits is taken as the number; anything after it is ignored. A token
/// without leading digits is port 0.
pub(crate) fn parse_port_lenient(token: &str) -> Result<u16, Error> {
    let s = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let digits = s[..digits_len].trim_start_matches('0');

    if digits.is_empty() {
        return Ok(0);
    }
    if negative {
        return Err(Error::new(ErrorKind::BadUrl));
    }
    // More than five significant digits cannot fit; also keeps `u32` from overflowing.
    if digits.len() > 5 {
        return Err(Error::new(ErrorKind::BadUrl));
    }
    let value = digits
        .bytes()
        .fold(0_u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    u16::try_from(value).map_err(|_| Error::new(ErrorKind::BadUrl))
}

/// Returns `true` if the host must be bracketed when written in a URL.
#[inline]
#[must_use]
pub(crate) fn needs_brackets(host: &str) -> bool {
    find(host, b':').is_some()
}
