//! Parser for [RFC 2255 LDAP URLs][RFC 2255] and lists of them.
//!
//! An LDAP URL names a directory server and, optionally, a search to run there:
//!
//! ```text
//! ldap[si]://host:port[/[dn[?[attributes][?[scope][?[filter][?extensions]]]]]]
//! ```
//!
//! [`LdapUrl::parse`] decomposes such a string into a descriptor, and
//! [`LdapUrlList`] parses whitespace- or comma-separated lists of URLs (or of
//! bare `host:port` pairs) and serializes them back.
//!
//! ```
//! use ldap_url::{LdapUrl, Scope};
//!
//! let url = LdapUrl::parse("ldap://[::1]:389/dc=example?cn,sn?sub?(uid=joe)")?;
//! assert_eq!(url.host(), "::1");
//! assert_eq!(url.port(), 389);
//! assert_eq!(url.dn(), Some("dc=example"));
//! assert_eq!(url.attributes(), Some(&["cn".to_owned(), "sn".to_owned()][..]));
//! assert_eq!(url.scope(), Scope::Subtree);
//! assert_eq!(url.filter(), Some("(uid=joe)"));
//! # Ok::<_, ldap_url::Error>(())
//! ```
//!
//! [RFC 2255]: https://tools.ietf.org/html/rfc2255
//!
//! # Accepted forms
//!
//! Besides the plain form, the parser tolerates:
//!
//! * enclosed URLs: `<ldap://host/>` and `<URL:ldap://host/>`,
//! * bracketed IPv6 literals: `ldap://[::1]:389/`,
//! * the non-conforming referral format `ldap://host:port??dn`, which early
//!   directory servers returned in search references (the `/` is missing and
//!   the DN sits where the scope would be).
//!
//! The filter is carried as opaque text, and no DN or attribute syntax is
//! checked. All fields are percent-decoded; percent-encoding is not provided.
//!
//! # Features
//!
//! * `std` feature (**enabled by default**):
//!     + Implements `std::error::Error` for [`Error`].
//!     + Without it, the crate is `no_std` (but still requires `alloc`).
//! * `memchr` feature:
//!     + Uses the `memchr` crate to search delimiters.
//! * `serde` feature:
//!     + Implements `Serialize` and `Deserialize` for the descriptor types.
//!
//! # Logging
//!
//! Parse entry points emit `tracing` events at `TRACE` level, and failures are
//! reported at `DEBUG` level. No subscriber is installed by this crate.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub(crate) mod buffer;
pub mod error;
pub mod format;
pub mod list;
pub(crate) mod parser;
pub mod percent_decode;
pub mod search;
pub mod types;
pub mod url;

pub use self::error::{Error, ErrorKind};
pub use self::list::LdapUrlList;
pub use self::search::SearchParams;
pub use self::types::{Protocol, Scheme, Scope, LDAPS_PORT, LDAP_PORT};
pub use self::url::{is_ldap_url, is_ldapi_url, is_ldaps_url, LdapUrl};
