//! LDAP URL parse error.

use core::fmt;

use alloc::collections::TryReserveError;

/// LDAP URL parse error.
///
/// Every failed operation reports exactly one [`ErrorKind`]; nothing built
/// before the failure is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Creates a new error of the given kind.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            repr: ErrorRepr::Parse(kind),
        }
    }

    /// Returns the error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldap_url::{ErrorKind, LdapUrl};
    ///
    /// let err = LdapUrl::parse("http://example.com/").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::BadScheme);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            ErrorRepr::Alloc(_) => ErrorKind::OutOfMemory,
            ErrorRepr::Parse(kind) => *kind,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LDAP URL error: {}", self.kind())
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(e: TryReserveError) -> Self {
        Self {
            repr: ErrorRepr::Alloc(e),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.repr {
            ErrorRepr::Alloc(e) => Some(e),
            ErrorRepr::Parse(_) => None,
        }
    }
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorRepr {
    /// Memory allocation failure.
    Alloc(TryReserveError),
    /// Rejected input.
    Parse(ErrorKind),
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required argument is malformed (e.g. a broken host list entry).
    InvalidArgument,
    /// Memory allocation failed.
    OutOfMemory,
    /// No `ldap://`, `ldaps://`, or `ldapi://` prefix.
    BadScheme,
    /// The URL opened with `<` but does not end with `>`.
    BadEnclosure,
    /// Malformed host/port structure, an empty port, or too many `?` fields.
    BadUrl,
    /// Malformed attribute list.
    BadAttributes,
    /// Unknown scope keyword.
    BadScope,
    /// The filter segment is present but empty.
    BadFilter,
    /// The extensions segment is present but has no entries.
    BadExtensions,
}

impl ErrorKind {
    /// Returns the short description of the kind.
    #[must_use]
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::OutOfMemory => "memory allocation failed",
            Self::BadScheme => "not an LDAP URL scheme",
            Self::BadEnclosure => "unterminated URL enclosure",
            Self::BadUrl => "malformed URL",
            Self::BadAttributes => "bad attribute list",
            Self::BadScope => "unknown search scope",
            Self::BadFilter => "empty filter",
            Self::BadExtensions => "empty extension list",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
