//! Lists of LDAP URLs.

use core::iter::FromIterator;
use core::slice;

use alloc::vec::{self, Vec};

use crate::buffer::try_push;
use crate::error::{Error, ErrorKind};
use crate::format::{HostList, UrlList};
use crate::parser::hostport::parse_port_lenient;
use crate::parser::str::{find, find_split_hole, Tokens};
use crate::percent_decode::decode;
use crate::types::Scheme;
use crate::url::LdapUrl;

/// An ordered list of LDAP URL descriptors.
///
/// The order of the list is the order of the entries in the parsed text.
///
/// # Examples
///
/// ```
/// use ldap_url::LdapUrlList;
///
/// let list = LdapUrlList::parse("ldap://a.example.com/, ldaps://b.example.com/ ldap://c")?;
/// let hosts: Vec<_> = list.iter().map(|url| url.host()).collect();
/// assert_eq!(hosts, ["a.example.com", "b.example.com", "c"]);
/// # Ok::<_, ldap_url::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LdapUrlList {
    /// Descriptors.
    urls: Vec<LdapUrl>,
}

impl LdapUrlList {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a list of LDAP URLs separated by commas or spaces.
    ///
    /// If any of the URLs is invalid, the whole parse fails with the error of
    /// the first invalid URL.
    ///
    /// ```
    /// use ldap_url::{ErrorKind, LdapUrlList};
    ///
    /// let err = LdapUrlList::parse("ldap://a/ http://b/").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::BadScheme);
    /// assert!(LdapUrlList::parse(" , ")?.is_empty());
    /// # Ok::<_, ldap_url::Error>(())
    /// ```
    pub fn parse(urls: &str) -> Result<Self, Error> {
        tracing::trace!(urls, "parsing LDAP URL list");
        let mut list = Self::new();
        for url in Tokens::new2(urls, b',', b' ') {
            try_push(&mut list.urls, LdapUrl::parse(url)?)?;
        }
        Ok(list)
    }

    /// Parses a list of `host[:port]` entries separated by commas or spaces.
    ///
    /// The scheme of every entry is `ldap`, and entries without a port get
    /// `default_port`. IPv6 addresses are written as `[address]` or
    /// `[address]:port`; a bare address with several colons is taken as a host
    /// without a port.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::InvalidArgument`] for a `[` without a matching
    /// `]`, or for anything other than `:port` after the `]`.
    ///
    /// ```
    /// use ldap_url::LdapUrlList;
    ///
    /// let list = LdapUrlList::parse_hosts("a.example.com:1389 fe80::1,[::1]", 389)?;
    /// let pairs: Vec<_> = list.iter().map(|url| (url.host(), url.port())).collect();
    /// assert_eq!(
    ///     pairs,
    ///     [("a.example.com", 1389), ("fe80::1", 389), ("::1", 389)]
    /// );
    /// # Ok::<_, ldap_url::Error>(())
    /// ```
    pub fn parse_hosts(hosts: &str, default_port: u16) -> Result<Self, Error> {
        tracing::trace!(hosts, default_port, "parsing LDAP host list");
        let mut list = Self::new();
        for spec in Tokens::new2(hosts, b',', b' ') {
            let url = parse_host_entry(spec, default_port);
            if let Err(e) = &url {
                tracing::debug!(host = spec, kind = %e.kind(), "rejected host list entry");
            }
            try_push(&mut list.urls, url?)?;
        }
        Ok(list)
    }

    /// Returns the number of descriptors.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns `true` if the list has no descriptors.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Returns the first descriptor.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&LdapUrl> {
        self.urls.first()
    }

    /// Returns the descriptors as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LdapUrl] {
        &self.urls
    }

    /// Returns an iterator over the descriptors.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, LdapUrl> {
        self.urls.iter()
    }

    /// Appends a descriptor to the end of the list.
    #[inline]
    pub fn push(&mut self, url: LdapUrl) {
        self.urls.push(url);
    }

    /// Deep-copies the list, reporting allocation failure.
    ///
    /// This is the fallible version of `clone()`.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut urls = Vec::new();
        urls.try_reserve(self.urls.len())?;
        for url in &self.urls {
            urls.push(url.try_clone()?);
        }
        Ok(Self { urls })
    }

    /// Returns the host-list serializer.
    ///
    /// The output is `host:port` entries separated by a space.
    #[inline]
    #[must_use]
    pub fn hosts(&self) -> HostList<'_> {
        HostList::new(&self.urls)
    }

    /// Returns the URL-list serializer.
    ///
    /// The output is `scheme://host:port/` entries separated by a space.
    #[inline]
    #[must_use]
    pub fn urls(&self) -> UrlList<'_> {
        UrlList::new(&self.urls)
    }
}

impl From<LdapUrl> for LdapUrlList {
    #[inline]
    fn from(url: LdapUrl) -> Self {
        let mut urls = Vec::with_capacity(1);
        urls.push(url);
        Self { urls }
    }
}

impl From<LdapUrlList> for Vec<LdapUrl> {
    #[inline]
    fn from(list: LdapUrlList) -> Self {
        list.urls
    }
}

impl FromIterator<LdapUrl> for LdapUrlList {
    #[inline]
    fn from_iter<I: IntoIterator<Item = LdapUrl>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LdapUrlList {
    type Item = LdapUrl;
    type IntoIter = vec::IntoIter<LdapUrl>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}

impl<'a> IntoIterator for &'a LdapUrlList {
    type Item = &'a LdapUrl;
    type IntoIter = slice::Iter<'a, LdapUrl>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Parses one `host[:port]` entry of a host list.
fn parse_host_entry(spec: &str, default_port: u16) -> Result<LdapUrl, Error> {
    let (host, port) = match spec.strip_prefix('[') {
        Some(bracketed) => {
            let (host, after) = find_split_hole(bracketed, b']')
                .ok_or_else(|| Error::new(ErrorKind::InvalidArgument))?;
            match after.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None if after.is_empty() => (host, None),
                None => return Err(Error::new(ErrorKind::InvalidArgument)),
            }
        }
        None => match find_split_hole(spec, b':') {
            // More than one colon: an IPv6 address without brackets, and no port.
            Some((_, rest)) if find(rest, b':').is_some() => (spec, None),
            Some((host, port)) => (host, Some(port)),
            None => (spec, None),
        },
    };

    let port = match port {
        Some(port) => parse_port_lenient(&decode(port)?)
            .map_err(|_| Error::new(ErrorKind::InvalidArgument))?,
        None => default_port,
    };
    Ok(LdapUrl::with_host(Scheme::Ldap, decode(host)?, port))
}
