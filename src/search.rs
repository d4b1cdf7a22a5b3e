//! Search parameters described by an LDAP URL.
//!
//! Issuing the search is left to the LDAP client; this module only gathers
//! the values a search request is built from.

use alloc::string::String;

use crate::types::Scope;
use crate::url::LdapUrl;

/// Filter used when the URL has none.
pub const DEFAULT_FILTER: &str = "(objectClass=*)";

/// Parameters of the search an LDAP URL describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchParams<'a> {
    /// Search base. The empty string if the URL has no DN.
    pub base: &'a str,
    /// Search scope.
    pub scope: Scope,
    /// Search filter.
    pub filter: &'a str,
    /// Requested attributes. `None` means all attributes.
    pub attributes: Option<&'a [String]>,
}

impl<'a> SearchParams<'a> {
    /// Extracts the search parameters, with [`DEFAULT_FILTER`] as the fallback.
    #[inline]
    #[must_use]
    pub fn new(url: &'a LdapUrl) -> Self {
        Self::with_default_filter(url, DEFAULT_FILTER)
    }

    /// Extracts the search parameters, with the given fallback filter.
    ///
    /// ```
    /// use ldap_url::{LdapUrl, Scope, SearchParams};
    ///
    /// let url = LdapUrl::parse("ldap://host/ou=people,dc=example?uid?base")?;
    /// let params = SearchParams::with_default_filter(&url, "(uid=*)");
    /// assert_eq!(params.base, "ou=people,dc=example");
    /// assert_eq!(params.scope, Scope::Base);
    /// assert_eq!(params.filter, "(uid=*)");
    /// assert_eq!(params.attributes, Some(&["uid".to_owned()][..]));
    /// # Ok::<_, ldap_url::Error>(())
    /// ```
    #[must_use]
    pub fn with_default_filter(url: &'a LdapUrl, default_filter: &'a str) -> Self {
        Self {
            base: url.dn().unwrap_or(""),
            scope: url.scope(),
            filter: url.filter().unwrap_or(default_filter),
            attributes: url.attributes(),
        }
    }
}
