//! Scheme and scope types.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Well-known port of the `ldap` and `ldapi` schemes.
pub const LDAP_PORT: u16 = 389;

/// Well-known port of the `ldaps` scheme.
pub const LDAPS_PORT: u16 = 636;

/// LDAP URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// `ldap`: LDAP over TCP.
    Ldap,
    /// `ldaps`: LDAP over TLS.
    Ldaps,
    /// `ldapi`: LDAP over IPC (a Unix domain socket).
    Ldapi,
}

impl Scheme {
    /// Returns the scheme name in lowercase, without `://`.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "ldap",
            Self::Ldaps => "ldaps",
            Self::Ldapi => "ldapi",
        }
    }

    /// Returns the port used when a URL does not specify one.
    ///
    /// ```
    /// use ldap_url::Scheme;
    ///
    /// assert_eq!(Scheme::Ldap.default_port(), 389);
    /// assert_eq!(Scheme::Ldaps.default_port(), 636);
    /// assert_eq!(Scheme::Ldapi.default_port(), 389);
    /// ```
    #[inline]
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Self::Ldaps => LDAPS_PORT,
            Self::Ldap | Self::Ldapi => LDAP_PORT,
        }
    }

    /// Returns the transport protocol of the scheme.
    #[inline]
    #[must_use]
    pub fn protocol(self) -> Protocol {
        match self {
            Self::Ldap | Self::Ldaps => Protocol::Tcp,
            Self::Ldapi => Protocol::Ipc,
        }
    }

    /// Returns `true` if the connection starts with a TLS handshake.
    #[inline]
    #[must_use]
    pub fn is_tls(self) -> bool {
        self == Self::Ldaps
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Parses an exact lowercase scheme name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ldap" => Ok(Self::Ldap),
            "ldaps" => Ok(Self::Ldaps),
            "ldapi" => Ok(Self::Ldapi),
            _ => Err(Error::new(ErrorKind::BadScheme)),
        }
    }
}

/// Transport protocol implied by a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// TCP, optionally wrapped in TLS.
    Tcp,
    /// Local inter-process communication.
    Ipc,
}

/// Search scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    /// The base entry only.
    #[cfg_attr(feature = "serde", serde(rename = "base"))]
    Base,
    /// The immediate children of the base entry.
    #[cfg_attr(feature = "serde", serde(rename = "one"))]
    OneLevel,
    /// The base entry and its whole subtree.
    #[cfg_attr(feature = "serde", serde(rename = "sub"))]
    Subtree,
}

impl Default for Scope {
    #[inline]
    fn default() -> Self {
        Self::Base
    }
}

impl Scope {
    /// Parses a scope keyword, ignoring ASCII case.
    ///
    /// `base`, `one`, `onetree`, `sub`, and `subtree` are recognized.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        const KEYWORDS: &[(&str, Scope)] = &[
            ("base", Scope::Base),
            ("one", Scope::OneLevel),
            ("onetree", Scope::OneLevel),
            ("sub", Scope::Subtree),
            ("subtree", Scope::Subtree),
        ];
        KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(s))
            .map(|&(_, scope)| scope)
    }

    /// Returns the short keyword of the scope.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::OneLevel => "one",
            Self::Subtree => "sub",
        }
    }
}

impl fmt::Display for Scope {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| Error::new(ErrorKind::BadScope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_keywords() {
        assert_eq!(Scope::from_keyword("base"), Some(Scope::Base));
        assert_eq!(Scope::from_keyword("BASE"), Some(Scope::Base));
        assert_eq!(Scope::from_keyword("One"), Some(Scope::OneLevel));
        assert_eq!(Scope::from_keyword("oneTree"), Some(Scope::OneLevel));
        assert_eq!(Scope::from_keyword("sub"), Some(Scope::Subtree));
        assert_eq!(Scope::from_keyword("SUBTREE"), Some(Scope::Subtree));
        assert_eq!(Scope::from_keyword(""), None);
        assert_eq!(Scope::from_keyword("children"), None);
        assert_eq!(Scope::from_keyword("subt"), None);
    }

    #[test]
    fn scheme_properties() {
        assert_eq!(Scheme::Ldap.protocol(), Protocol::Tcp);
        assert_eq!(Scheme::Ldaps.protocol(), Protocol::Tcp);
        assert_eq!(Scheme::Ldapi.protocol(), Protocol::Ipc);
        assert!(Scheme::Ldaps.is_tls());
        assert!(!Scheme::Ldap.is_tls());
        assert!(!Scheme::Ldapi.is_tls());
    }

    #[test]
    fn scheme_from_str_is_exact() {
        assert_eq!("ldapi".parse::<Scheme>().ok(), Some(Scheme::Ldapi));
        assert!("LDAP".parse::<Scheme>().is_err());
        assert!("ldap://".parse::<Scheme>().is_err());
    }
}
