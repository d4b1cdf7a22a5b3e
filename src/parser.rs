//! Parsers for the pieces of an LDAP URL.
//!
//! These work on string slices of a private copy of the input and never
//! decode anything themselves; percent-decoding is done by the caller.

pub(crate) mod fields;
pub(crate) mod hostport;
pub(crate) mod scheme;
pub(crate) mod str;
