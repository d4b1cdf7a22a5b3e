//! Splitter for the `?`-delimited field chain after the DN slash.

use crate::parser::str::find_split_hole;

/// Maximum number of fields: dn, attributes, scope, filter, and extensions.
pub(crate) const MAX_FIELDS: usize = 5;

/// Sequential splitter of `dn?attrs?scope?filter?exts`.
///
/// Each call to [`next`][`Self::next`] yields the text up to the next `?` (or
/// the end of the string). Once the end is reached, no more fields are yielded,
/// so trailing fields stay absent.
#[derive(Debug, Clone)]
pub(crate) struct FieldSplitter<'a> {
    /// Unread rest, or `None` if the end of the chain was consumed.
    rest: Option<&'a str>,
    /// Number of fields yielded so far.
    taken: usize,
}

impl<'a> FieldSplitter<'a> {
    /// Creates a splitter for the chain after the `/`.
    #[inline]
    #[must_use]
    pub(crate) fn new(chain: &'a str) -> Self {
        Self {
            rest: Some(chain),
            taken: 0,
        }
    }

    /// Returns `true` if another field follows the last yielded one.
    #[inline]
    #[must_use]
    pub(crate) fn has_next(&self) -> bool {
        self.rest.is_some()
    }

    /// Returns the number of fields yielded so far.
    #[inline]
    #[must_use]
    pub(crate) fn taken(&self) -> usize {
        self.taken
    }
}

impl<'a> Iterator for FieldSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let (field, rest) = match find_split_hole(rest, b'?') {
            Some((field, rest)) => (field, Some(rest)),
            None => (rest, None),
        };
        self.rest = rest;
        self.taken += 1;
        Some(field)
    }
}

impl core::iter::FusedIterator for FieldSplitter<'_> {}
