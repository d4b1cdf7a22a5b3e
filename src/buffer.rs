//! Fallible allocation helpers.
//!
//! `String::from`, `Vec::push`, and friends abort on allocation failure, so
//! owned fields are built through these helpers, which report the failure as
//! an error instead.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::parser::str::Tokens;
use crate::percent_decode::decode;

/// Copies the string into a newly allocated string.
pub(crate) fn try_copy_str(s: &str) -> Result<String, Error> {
    let mut buf = String::new();
    try_push_str(&mut buf, s)?;
    Ok(buf)
}

/// Appends the string to the buffer.
pub(crate) fn try_push_str(buf: &mut String, s: &str) -> Result<(), Error> {
    buf.try_reserve(s.len())?;
    buf.push_str(s);
    Ok(())
}

/// Deep-copies the list of strings.
pub(crate) fn try_clone_strings(src: &[String]) -> Result<Vec<String>, Error> {
    let mut dest = Vec::new();
    dest.try_reserve(src.len())?;
    for s in src {
        dest.push(try_copy_str(s)?);
    }
    Ok(dest)
}

/// Appends the item to the vector.
pub(crate) fn try_push<T>(v: &mut Vec<T>, item: T) -> Result<(), Error> {
    v.try_reserve(1)?;
    v.push(item);
    Ok(())
}

/// Splits the string on the delimiter, skipping empty pieces.
///
/// If `decode_each` is true, each piece is percent-decoded after splitting.
pub(crate) fn try_split(s: &str, delim: u8, decode_each: bool) -> Result<Vec<String>, Error> {
    let mut pieces = Vec::new();
    for piece in Tokens::new(s, delim) {
        let piece = if decode_each {
            decode(piece)?
        } else {
            try_copy_str(piece)?
        };
        try_push(&mut pieces, piece)?;
    }
    Ok(pieces)
}
