//! Percent decoding.
//!
//! The decoder is permissive: it never rejects its input. Escapes are decoded
//! one byte at a time, characters after `%` that are not hex digits still
//! produce a byte, and a truncated escape at the end of the input is dropped.
//!
//! ```
//! use ldap_url::percent_decode::decode;
//!
//! assert_eq!(decode("%41%42")?, "AB");
//! assert_eq!(decode("cn=J%c3%b6rg")?, "cn=J\u{F6}rg");
//! // A trailing lone `%` ends the output.
//! assert_eq!(decode("abc%")?, "abc");
//! # Ok::<_, ldap_url::Error>(())
//! ```

use core::iter::FusedIterator;

use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::try_push_str;
use crate::error::Error;
use crate::parser::str::find;

/// Iterator over the bytes of a percent-decoded string.
///
/// The number of bytes yielded is never more than the length of the source.
#[derive(Debug, Clone)]
pub struct PercentDecoded<'a> {
    /// The rest of the input.
    rest: &'a [u8],
}

impl<'a> PercentDecoded<'a> {
    /// Creates a decoding iterator over the given string.
    #[inline]
    #[must_use]
    pub fn new(s: &'a str) -> Self {
        Self {
            rest: s.as_bytes(),
        }
    }
}

impl Iterator for PercentDecoded<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let (&first, rest) = self.rest.split_first()?;
        if first != b'%' {
            self.rest = rest;
            return Some(first);
        }
        match *rest {
            [upper, lower, ref rest @ ..] => {
                self.rest = rest;
                Some((unhex(upper) << 4).wrapping_add(unhex(lower)))
            }
            _ => {
                // Truncated escape: nothing more to output.
                self.rest = &[];
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rest.len()))
    }
}

impl FusedIterator for PercentDecoded<'_> {}

/// Returns the value of a hex digit.
///
/// Digits and uppercase letters `A`-`F` map as usual; every other byte is
/// treated as a lowercase letter, so non-hex bytes still yield a value.
#[inline]
#[must_use]
fn unhex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => c.wrapping_sub(b'a').wrapping_add(10),
    }
}

/// Percent-decodes the string into a newly allocated string.
///
/// Decoded byte sequences that are not valid UTF-8 are replaced with
/// `U+FFFD REPLACEMENT CHARACTER`.
///
/// # Failures
///
/// Fails with [`ErrorKind::OutOfMemory`][`crate::ErrorKind::OutOfMemory`] if
/// the buffer cannot be allocated.
pub fn decode(s: &str) -> Result<String, Error> {
    let mut buf = String::new();
    if find(s, b'%').is_none() {
        buf.try_reserve(s.len())?;
        buf.push_str(s);
        return Ok(buf);
    }

    let mut bytes = Vec::new();
    bytes.try_reserve(s.len())?;
    // Never grows beyond the reserved length.
    bytes.extend(PercentDecoded::new(s));
    match String::from_utf8(bytes) {
        Ok(decoded) => Ok(decoded),
        Err(e) => try_from_utf8_lossy(e.as_bytes()),
    }
}

/// Converts the bytes into a string, replacing each invalid UTF-8 sequence
/// with `U+FFFD`.
///
/// Same result as `String::from_utf8_lossy`, but reports allocation failure.
fn try_from_utf8_lossy(mut rest: &[u8]) -> Result<String, Error> {
    let mut buf = String::new();
    loop {
        match core::str::from_utf8(rest) {
            Ok(valid) => {
                try_push_str(&mut buf, valid)?;
                return Ok(buf);
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                if let Ok(valid) = core::str::from_utf8(valid) {
                    try_push_str(&mut buf, valid)?;
                }
                try_push_str(&mut buf, REPLACEMENT_CHARACTER)?;
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at the end.
                    None => return Ok(buf),
                }
            }
        }
    }
}

/// `U+FFFD REPLACEMENT CHARACTER`.
const REPLACEMENT_CHARACTER: &str = "\u{FFFD}";
