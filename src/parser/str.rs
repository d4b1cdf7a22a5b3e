//! Functions for common string operations.

/// Returns the index of the first occurrence of the byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] `needle` must be ASCII");
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack.as_bytes())
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.bytes().position(|b| b == needle)
    }
}

/// Splits the string at the first occurrence of the byte, dropping the byte.
///
/// Returns `(before, after)`.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s, needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Iterator over the non-empty pieces of a string split on any of two bytes.
///
/// This is the tokenizer for list fields: runs of delimiters count as one
/// delimiter, and leading or trailing delimiters produce no empty piece.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    /// The rest of the input.
    rest: &'a str,
    /// First delimiter.
    delim1: u8,
    /// Second delimiter.
    delim2: u8,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer splitting on a single delimiter.
    #[inline]
    #[must_use]
    pub(crate) fn new(s: &'a str, delim: u8) -> Self {
        Self::new2(s, delim, delim)
    }

    /// Creates a tokenizer splitting on either of the two delimiters.
    #[inline]
    #[must_use]
    pub(crate) fn new2(s: &'a str, delim1: u8, delim2: u8) -> Self {
        debug_assert!(delim1.is_ascii() && delim2.is_ascii());
        Self {
            rest: s,
            delim1,
            delim2,
        }
    }

    /// Returns the position of the next delimiter in the rest.
    #[inline]
    #[must_use]
    fn next_delim(&self) -> Option<usize> {
        #[cfg(feature = "memchr")]
        {
            memchr::memchr2(self.delim1, self.delim2, self.rest.as_bytes())
        }
        #[cfg(not(feature = "memchr"))]
        {
            self.rest
                .bytes()
                .position(|b| b == self.delim1 || b == self.delim2)
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() {
                return None;
            }
            let (token, rest) = match self.next_delim() {
                Some(pos) => (&self.rest[..pos], &self.rest[(pos + 1)..]),
                None => (self.rest, ""),
            };
            self.rest = rest;
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

/// Strips the ASCII prefix from the string, ignoring ASCII case.
#[inline]
#[must_use]
pub(crate) fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    debug_assert!(prefix.is_ascii(), "[precondition] `prefix` must be ASCII");
    let head = s.as_bytes().get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        // `prefix` is ASCII, so `prefix.len()` lies on a char boundary.
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
