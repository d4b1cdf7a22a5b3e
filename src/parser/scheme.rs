//! Scheme prefix detection.

use crate::parser::str::strip_prefix_ignore_ascii_case;
use crate::types::Scheme;

/// `URL:` prefix permitted before the scheme.
const URL_COLON: &str = "URL:";

/// Recognized prefixes, checked in order.
const PREFIXES: &[(&str, Scheme)] = &[
    ("ldap://", Scheme::Ldap),
    ("ldaps://", Scheme::Ldaps),
    ("ldapi://", Scheme::Ldapi),
];

/// Result of a successful prefix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Prefixed<'a> {
    /// Whether the URL opened with `<`.
    ///
    /// The matching `>` is not checked here.
    pub(crate) enclosed: bool,
    /// Matched scheme.
    pub(crate) scheme: Scheme,
    /// The rest of the input after `scheme://`.
    pub(crate) rest: &'a str,
}

/// Skips the optional `<`, the optional `URL:`, and the scheme with `://`.
///
/// Returns `None` if the string does not start with an LDAP URL scheme.
#[must_use]
pub(crate) fn skip_url_prefix(url: &str) -> Option<Prefixed<'_>> {
    let (enclosed, i) = match url.strip_prefix('<') {
        Some(rest) => (true, rest),
        None => (false, url),
    };
    let i = strip_prefix_ignore_ascii_case(i, URL_COLON).unwrap_or(i);

    PREFIXES.iter().find_map(|&(prefix, scheme)| {
        strip_prefix_ignore_ascii_case(i, prefix).map(|rest| Prefixed {
            enclosed,
            scheme,
            rest,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_schemes() {
        let p = skip_url_prefix("ldap://host/").expect("ldap scheme");
        assert_eq!((p.enclosed, p.scheme, p.rest), (false, Scheme::Ldap, "host/"));

        let p = skip_url_prefix("LDAPS://host").expect("ldaps scheme");
        assert_eq!((p.enclosed, p.scheme, p.rest), (false, Scheme::Ldaps, "host"));

        let p = skip_url_prefix("ldapi://%2Fvar%2Frun").expect("ldapi scheme");
        assert_eq!(p.scheme, Scheme::Ldapi);
        assert_eq!(p.rest, "%2Fvar%2Frun");
    }

    #[test]
    fn enclosure_and_url_colon() {
        let p = skip_url_prefix("<URL:ldap://host/>").expect("enclosed");
        assert!(p.enclosed);
        assert_eq!(p.rest, "host/>");

        let p = skip_url_prefix("url:Ldap://").expect("url colon without enclosure");
        assert!(!p.enclosed);
        assert_eq!(p.rest, "");
    }

    #[test]
    fn not_ldap() {
        assert_eq!(skip_url_prefix(""), None);
        assert_eq!(skip_url_prefix("<"), None);
        assert_eq!(skip_url_prefix("http://host/"), None);
        assert_eq!(skip_url_prefix("ldap:/host"), None);
        assert_eq!(skip_url_prefix("ldapx://host"), None);
        assert_eq!(skip_url_prefix(" ldap://host"), None);
        assert_eq!(skip_url_prefix("<<ldap://host>>"), None);
    }
}
