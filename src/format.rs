//! Serialization of descriptor lists.
//!
//! The serializers are `Display` proxies returned by
//! [`LdapUrlList::hosts`][`crate::LdapUrlList::hosts`] and
//! [`LdapUrlList::urls`][`crate::LdapUrlList::urls`]; use `to_string()`, or
//! [`ToStringFallible::try_to_string`] to get allocation failure as an error.
//!
//! Only the scheme, host, and port are written. Hosts containing a colon are
//! bracketed, and port 0 is omitted.

use core::fmt::{self, Write as _};

use alloc::collections::TryReserveError;
use alloc::string::String;

use crate::error::{Error, ErrorKind};
use crate::parser::hostport::needs_brackets;
use crate::url::LdapUrl;

/// Writes the host, bracketed if necessary, and the nonzero port.
fn write_host_port(f: &mut fmt::Formatter<'_>, url: &LdapUrl) -> fmt::Result {
    let host = url.host();
    if needs_brackets(host) {
        write!(f, "[{}]", host)?;
    } else {
        f.write_str(host)?;
    }
    if url.port() != 0 {
        write!(f, ":{}", url.port())?;
    }
    Ok(())
}

/// Space-separated `host:port` list.
///
/// ```
/// use ldap_url::LdapUrlList;
///
/// let list = LdapUrlList::parse_hosts("ldap1.example.com, [::1]:636", 389)?;
/// assert_eq!(list.hosts().to_string(), "ldap1.example.com:389 [::1]:636");
/// # Ok::<_, ldap_url::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HostList<'a> {
    /// Descriptors.
    urls: &'a [LdapUrl],
}

impl<'a> HostList<'a> {
    /// Creates a new serializer.
    #[inline]
    #[must_use]
    pub(crate) fn new(urls: &'a [LdapUrl]) -> Self {
        Self { urls }
    }
}

impl fmt::Display for HostList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, url) in self.urls.iter().enumerate() {
            if i != 0 {
                f.write_char(' ')?;
            }
            write_host_port(f, url)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for HostList<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        eq_str_display(other, self)
    }
}

impl PartialEq<&str> for HostList<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str_display(other, self)
    }
}

/// Space-separated `scheme://host:port/` list.
///
/// ```
/// use ldap_url::LdapUrlList;
///
/// let list = LdapUrlList::parse("ldaps://a.example.com/dc=x, ldap://[::1]:1389")?;
/// assert_eq!(
///     list.urls().to_string(),
///     "ldaps://a.example.com:636/ ldap://[::1]:1389/"
/// );
/// # Ok::<_, ldap_url::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UrlList<'a> {
    /// Descriptors.
    urls: &'a [LdapUrl],
}

impl<'a> UrlList<'a> {
    /// Creates a new serializer.
    #[inline]
    #[must_use]
    pub(crate) fn new(urls: &'a [LdapUrl]) -> Self {
        Self { urls }
    }
}

impl fmt::Display for UrlList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, url) in self.urls.iter().enumerate() {
            if i != 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}://", url.scheme())?;
            write_host_port(f, url)?;
            f.write_char('/')?;
        }
        Ok(())
    }
}

impl PartialEq<str> for UrlList<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        eq_str_display(other, self)
    }
}

impl PartialEq<&str> for UrlList<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str_display(other, self)
    }
}

/// Returns true if the two equals after they are converted to strings.
pub(crate) fn eq_str_display<T>(s: &str, d: &T) -> bool
where
    T: ?Sized + fmt::Display,
{
    /// Dummy writer to compare the formatted object to the given string.
    struct CmpWriter<'a>(&'a str);
    impl fmt::Write for CmpWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.0.strip_prefix(s) {
                Some(rest) => {
                    self.0 = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut writer = CmpWriter(s);
    let succeeded = write!(writer, "{}", d).is_ok();
    succeeded && writer.0.is_empty()
}

/// [`ToString`][`alloc::string::ToString`], but without panic.
pub trait ToStringFallible: alloc::string::ToString {
    /// [`ToString::to_string`][`alloc::string::ToString::to_string`], but without panic on OOM.
    ///
    /// # Failures
    ///
    /// Fails with [`ErrorKind::OutOfMemory`] if the buffer cannot grow, and
    /// with [`ErrorKind::InvalidArgument`] if the `Display` impl itself
    /// returns an error.
    fn try_to_string(&self) -> Result<String, Error>;
}

impl<T: fmt::Display> ToStringFallible for T {
    fn try_to_string(&self) -> Result<String, Error> {
        /// `fmt::Write for String` panics on allocation failure, so use custom wrapper.
        struct FmtWritableString {
            /// Backend buffer.
            buf: String,
            /// Memory allocation error.
            error: Option<TryReserveError>,
        }
        impl fmt::Write for FmtWritableString {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                if let Err(e) = self.buf.try_reserve(s.len()) {
                    self.error = Some(e);
                    return Err(fmt::Error);
                }
                self.buf.push_str(s);
                Ok(())
            }
        }

        let mut writer = FmtWritableString {
            buf: String::new(),
            error: None,
        };
        let result = write!(writer, "{}", self);
        match (result, writer.error) {
            (_, Some(e)) => Err(e.into()),
            (Ok(()), None) => Ok(writer.buf),
            // The `Display` impl failed on its own.
            (Err(_), None) => Err(Error::new(ErrorKind::InvalidArgument)),
        }
    }
}
