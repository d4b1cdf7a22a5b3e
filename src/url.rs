//! LDAP URL descriptor.

use core::str::FromStr;

use alloc::string::String;
use alloc::vec::Vec;

use crate::buffer::{try_clone_strings, try_copy_str, try_split};
use crate::error::{Error, ErrorKind};
use crate::parser::fields::{FieldSplitter, MAX_FIELDS};
use crate::parser::hostport::{decompose_hostport, parse_port_lenient, HostPort};
use crate::parser::scheme::skip_url_prefix;
use crate::parser::str::find_split_hole;
use crate::percent_decode::decode;
use crate::search::SearchParams;
use crate::types::{Protocol, Scheme, Scope};

/// A parsed LDAP URL.
///
/// All text fields are percent-decoded. Escapes that decode to invalid UTF-8
/// are replaced with `U+FFFD REPLACEMENT CHARACTER`, so such bytes are not
/// recoverable from the descriptor. Fields missing from the URL are
/// `None` (or the default scope), which is distinct from an empty value:
/// `ldap://host` has no DN, while `ldap://host/` has the empty DN.
///
/// # Examples
///
/// ```
/// use ldap_url::{LdapUrl, Scheme, Scope};
///
/// let url = LdapUrl::parse("ldaps://ldap.example.com/dc=example,dc=com??one")?;
/// assert_eq!(url.scheme(), Scheme::Ldaps);
/// assert_eq!(url.host(), "ldap.example.com");
/// assert_eq!(url.port(), 636);
/// assert_eq!(url.dn(), Some("dc=example,dc=com"));
/// assert_eq!(url.attributes(), None);
/// assert_eq!(url.scope(), Scope::OneLevel);
/// assert_eq!(url.filter(), None);
/// # Ok::<_, ldap_url::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LdapUrl {
    /// Scheme.
    scheme: Scheme,
    /// Host, without IPv6 brackets. Empty if unspecified.
    host: String,
    /// Port.
    port: u16,
    /// Base DN.
    dn: Option<String>,
    /// Requested attributes. `None` means all attributes.
    attributes: Option<Vec<String>>,
    /// Search scope.
    scope: Scope,
    /// Search filter.
    filter: Option<String>,
    /// Extensions, possibly prefixed with `!` for critical ones.
    extensions: Option<Vec<String>>,
}

impl LdapUrl {
    /// Creates a descriptor with only the scheme, host, and port set.
    #[inline]
    #[must_use]
    pub(crate) fn with_host(scheme: Scheme, host: String, port: u16) -> Self {
        Self {
            scheme,
            host,
            port,
            dn: None,
            attributes: None,
            scope: Scope::Base,
            filter: None,
            extensions: None,
        }
    }

    /// Parses an LDAP URL.
    ///
    /// The input may be enclosed as `<...>` and may have the `URL:` prefix.
    ///
    /// # Failures
    ///
    /// * [`ErrorKind::BadScheme`] if the URL does not start with `ldap://`,
    ///   `ldaps://`, or `ldapi://`.
    /// * [`ErrorKind::BadEnclosure`] if the URL opened with `<` but does not
    ///   end with `>`.
    /// * [`ErrorKind::BadUrl`] for a malformed host or port, or for too many
    ///   `?` fields.
    /// * [`ErrorKind::BadAttributes`], [`ErrorKind::BadScope`],
    ///   [`ErrorKind::BadFilter`], and [`ErrorKind::BadExtensions`] for the
    ///   respective fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldap_url::{ErrorKind, LdapUrl};
    ///
    /// assert!(LdapUrl::parse("<ldap://host/>").is_ok());
    /// assert_eq!(
    ///     LdapUrl::parse("<ldap://host/").unwrap_err().kind(),
    ///     ErrorKind::BadEnclosure
    /// );
    /// assert_eq!(
    ///     LdapUrl::parse("ldap://host/dc=x?cn?children").unwrap_err().kind(),
    ///     ErrorKind::BadScope
    /// );
    /// ```
    pub fn parse(url: &str) -> Result<Self, Error> {
        tracing::trace!(url, "parsing LDAP URL");
        let parsed = parse_url(url);
        if let Err(e) = &parsed {
            tracing::debug!(url, kind = %e.kind(), "rejected LDAP URL");
        }
        parsed
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the transport protocol implied by the scheme.
    #[inline]
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.scheme.protocol()
    }

    /// Returns `true` if the scheme is `ldaps`.
    #[inline]
    #[must_use]
    pub fn is_tls(&self) -> bool {
        self.scheme.is_tls()
    }

    /// Returns the host, without IPv6 brackets.
    ///
    /// The empty string means the host is unspecified.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    ///
    /// If the URL has no port, this is the default port of the scheme.
    #[inline]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the base DN.
    ///
    /// ```
    /// use ldap_url::LdapUrl;
    ///
    /// // `%E9` alone is not UTF-8.
    /// let url = LdapUrl::parse("ldap://host/cn=%E9t%E9")?;
    /// assert_eq!(url.dn(), Some("cn=\u{FFFD}t\u{FFFD}"));
    /// # Ok::<_, ldap_url::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn dn(&self) -> Option<&str> {
        self.dn.as_deref()
    }

    /// Returns the requested attributes, in the order written.
    ///
    /// `None` means all attributes are requested.
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> Option<&[String]> {
        self.attributes.as_deref()
    }

    /// Returns the search scope.
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the search filter.
    #[inline]
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the extensions, in the order written.
    ///
    /// Critical extensions keep their leading `!`.
    #[inline]
    #[must_use]
    pub fn extensions(&self) -> Option<&[String]> {
        self.extensions.as_deref()
    }

    /// Returns an iterator over the critical extensions, with `!` stripped.
    ///
    /// ```
    /// use ldap_url::LdapUrl;
    ///
    /// let url = LdapUrl::parse("ldap://host/???(objectClass=*)?!bindname=cn=admin,x-bindpw=secret")?;
    /// let critical: Vec<_> = url.critical_extensions().collect();
    /// assert_eq!(critical, ["bindname=cn=admin"]);
    /// # Ok::<_, ldap_url::Error>(())
    /// ```
    pub fn critical_extensions(&self) -> impl Iterator<Item = &str> + '_ {
        self.extensions
            .iter()
            .flatten()
            .filter_map(|ext| ext.strip_prefix('!'))
    }

    /// Replaces the host.
    #[inline]
    pub fn set_host<T: Into<String>>(&mut self, host: T) {
        self.host = host.into();
    }

    /// Replaces the port.
    #[inline]
    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Returns the parameters of the search the URL describes.
    ///
    /// A missing filter becomes [`DEFAULT_FILTER`][`crate::search::DEFAULT_FILTER`].
    #[inline]
    #[must_use]
    pub fn search_params(&self) -> SearchParams<'_> {
        SearchParams::new(self)
    }

    /// Returns the parameters of the search, with the given fallback filter.
    #[inline]
    #[must_use]
    pub fn search_params_with_default_filter<'a>(
        &'a self,
        default_filter: &'a str,
    ) -> SearchParams<'a> {
        SearchParams::with_default_filter(self, default_filter)
    }

    /// Deep-copies the descriptor, reporting allocation failure.
    ///
    /// This is the fallible version of `clone()`.
    pub fn try_clone(&self) -> Result<Self, Error> {
        Ok(Self {
            scheme: self.scheme,
            host: try_copy_str(&self.host)?,
            port: self.port,
            dn: self.dn.as_deref().map(try_copy_str).transpose()?,
            attributes: self
                .attributes
                .as_deref()
                .map(try_clone_strings)
                .transpose()?,
            scope: self.scope,
            filter: self.filter.as_deref().map(try_copy_str).transpose()?,
            extensions: self
                .extensions
                .as_deref()
                .map(try_clone_strings)
                .transpose()?,
        })
    }
}

impl FromStr for LdapUrl {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LdapUrl {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Deserialized descriptor fields, not yet checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "LdapUrl")]
struct UncheckedLdapUrl {
    /// Scheme.
    scheme: Scheme,
    /// Host.
    host: String,
    /// Port.
    port: u16,
    /// Base DN.
    dn: Option<String>,
    /// Requested attributes.
    attributes: Option<Vec<String>>,
    /// Search scope.
    scope: Scope,
    /// Search filter.
    filter: Option<String>,
    /// Extensions.
    extensions: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
impl UncheckedLdapUrl {
    /// Rejects field values that [`LdapUrl::parse`] never produces.
    fn check(self) -> Result<LdapUrl, Error> {
        if self.attributes.iter().flatten().any(String::is_empty) {
            return Err(Error::new(ErrorKind::BadAttributes));
        }
        if self.filter.as_deref() == Some("") {
            return Err(Error::new(ErrorKind::BadFilter));
        }
        if let Some(extensions) = &self.extensions {
            if extensions.is_empty() || extensions.iter().any(String::is_empty) {
                return Err(Error::new(ErrorKind::BadExtensions));
            }
        }
        Ok(LdapUrl {
            scheme: self.scheme,
            host: self.host,
            port: self.port,
            dn: self.dn,
            attributes: self.attributes,
            scope: self.scope,
            filter: self.filter,
            extensions: self.extensions,
        })
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for LdapUrl {
    /// Deserializes the fields, then applies the checks of [`LdapUrl::parse`]:
    /// no empty attribute, no empty filter, and no empty extension list.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let unchecked = <UncheckedLdapUrl as serde::Deserialize<'de>>::deserialize(deserializer)?;
        unchecked.check().map_err(serde::de::Error::custom)
    }
}

/// Returns `true` if the string starts like an LDAP URL of any scheme.
///
/// Only the prefix is checked; the rest of the URL may still be malformed.
#[must_use]
pub fn is_ldap_url(url: &str) -> bool {
    skip_url_prefix(url).is_some()
}

/// Returns `true` if the string starts like an `ldaps` URL.
#[must_use]
pub fn is_ldaps_url(url: &str) -> bool {
    skip_url_prefix(url).map_or(false, |p| p.scheme == Scheme::Ldaps)
}

/// Returns `true` if the string starts like an `ldapi` URL.
#[must_use]
pub fn is_ldapi_url(url: &str) -> bool {
    skip_url_prefix(url).map_or(false, |p| p.scheme == Scheme::Ldapi)
}

/// Parses an LDAP URL into a descriptor.
fn parse_url(url_in: &str) -> Result<LdapUrl, Error> {
    let prefixed = skip_url_prefix(url_in).ok_or_else(|| Error::new(ErrorKind::BadScheme))?;

    let working = try_copy_str(prefixed.rest)?;
    let url = if prefixed.enclosed {
        working
            .strip_suffix('>')
            .ok_or_else(|| Error::new(ErrorKind::BadEnclosure))?
    } else {
        working.as_str()
    };

    let scheme = prefixed.scheme;
    let mut lud = LdapUrl::with_host(scheme, String::new(), scheme.default_port());

    let (hostport, chain) = match find_split_hole(url, b'/') {
        Some((hostport, chain)) => (hostport, Some(chain)),
        None => (url, None),
    };

    let HostPort { host, port } = decompose_hostport(hostport)?;
    let port = match port {
        Some(port) => {
            let decoded = decode(port)?;
            if decoded.is_empty() {
                return Err(Error::new(ErrorKind::BadUrl));
            }
            lud.port = parse_port_lenient(&decoded)?;
            Some(decoded)
        }
        None => None,
    };
    lud.host = decode(host)?;

    let chain = match (chain, port) {
        (Some(chain), _) => chain,
        (None, Some(port)) => {
            lud.dn = legacy_referral_dn(&port)?;
            return Ok(lud);
        }
        (None, None) => return Ok(lud),
    };

    let mut fields = FieldSplitter::new(chain);
    while let Some(field) = fields.next() {
        match fields.taken() {
            1 => lud.dn = Some(decode(field)?),
            2 => {
                if !field.is_empty() {
                    lud.attributes = Some(
                        parse_attributes(field).map_err(|_| Error::new(ErrorKind::BadAttributes))?,
                    );
                }
            }
            3 => {
                if !field.is_empty() {
                    lud.scope = Scope::from_keyword(&decode(field)?)
                        .ok_or_else(|| Error::new(ErrorKind::BadScope))?;
                }
            }
            4 => {
                let filter = decode(field)?;
                if filter.is_empty() {
                    // An extension list cannot follow a missing filter.
                    let kind = if fields.has_next() {
                        ErrorKind::BadUrl
                    } else {
                        ErrorKind::BadFilter
                    };
                    return Err(Error::new(kind));
                }
                lud.filter = Some(filter);
            }
            _ => {
                debug_assert_eq!(fields.taken(), MAX_FIELDS);
                if fields.has_next() {
                    return Err(Error::new(ErrorKind::BadUrl));
                }
                let extensions =
                    try_split(field, b',', true).map_err(|_| Error::new(ErrorKind::BadExtensions))?;
                if extensions.is_empty() {
                    return Err(Error::new(ErrorKind::BadExtensions));
                }
                lud.extensions = Some(extensions);
            }
        }
    }

    Ok(lud)
}

/// Decodes the attribute field, then splits it on commas.
fn parse_attributes(field: &str) -> Result<Vec<String>, Error> {
    try_split(&decode(field)?, b',', false)
}

/// Extracts the DN from `host:port??dn`, the malformed referral format.
///
/// `after_colon` is the decoded text after the port-separating colon, and
/// the DN found in it is decoded once more. Returns `None` if the text is not
/// in that format.
fn legacy_referral_dn(after_colon: &str) -> Result<Option<String>, Error> {
    let dn = find_split_hole(after_colon, b'?').and_then(|(_port, rest)| rest.strip_prefix('?'));
    match dn {
        Some(dn) => decode(dn).map(Some),
        None => Ok(None),
    }
}
