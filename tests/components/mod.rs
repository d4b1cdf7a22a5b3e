//! Components.
#![allow(dead_code)]

use ldap_url::{LdapUrl, Scheme, Scope};

/// Test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Test case name.
    pub name: Option<&'a str>,
    /// Test case description.
    pub description: Option<&'a str>,
    /// LDAP URL to parse.
    pub url: &'a str,
    /// Expected components.
    pub components: Components<'a>,
    /// Expected output of the URL-list serializer for this URL alone.
    pub serialized: &'a str,
}

/// Expected descriptor fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components<'a> {
    /// Scheme.
    pub scheme: Scheme,
    /// Host.
    pub host: &'a str,
    /// Port.
    pub port: u16,
    /// Base DN.
    pub dn: Option<&'a str>,
    /// Attributes.
    pub attributes: Option<&'a [&'a str]>,
    /// Scope.
    pub scope: Scope,
    /// Filter.
    pub filter: Option<&'a str>,
    /// Extensions.
    pub extensions: Option<&'a [&'a str]>,
}

impl Components<'_> {
    #[must_use]
    pub const fn const_default() -> Self {
        Self {
            scheme: Scheme::Ldap,
            host: "",
            port: 389,
            dn: None,
            attributes: None,
            scope: Scope::Base,
            filter: None,
            extensions: None,
        }
    }

    /// Returns the components of the given descriptor.
    #[must_use]
    pub fn of(url: &LdapUrl) -> Components<'_> {
        Components {
            scheme: url.scheme(),
            host: url.host(),
            port: url.port(),
            dn: url.dn(),
            // Borrowed slices of `&str` cannot be made from `&[String]`, so
            // callers compare attributes and extensions with `eq_strings`.
            attributes: None,
            scope: url.scope(),
            filter: url.filter(),
            extensions: None,
        }
    }
}

impl Default for Components<'_> {
    #[inline]
    fn default() -> Self {
        Self::const_default()
    }
}

/// Returns true if the two optional lists have the same strings in the same order.
#[must_use]
pub fn eq_strings(actual: Option<&[String]>, expected: Option<&[&str]>) -> bool {
    match (actual, expected) {
        (None, None) => true,
        (Some(actual), Some(expected)) => {
            actual.len() == expected.len() && actual.iter().zip(expected).all(|(a, e)| a == e)
        }
        _ => false,
    }
}

macro_rules! components {
    () => {
        Components::default()
    };
    ($($field:ident: $expr:expr),* $(,)?) => {
        Components {
            $( $field: components!(@field; $field: $expr) ),*,
            .. Components::const_default()
        }
    };
    (@field; scheme: $expr:expr) => {
        $expr
    };
    (@field; host: $expr:expr) => {
        $expr
    };
    (@field; port: $expr:expr) => {
        $expr
    };
    (@field; scope: $expr:expr) => {
        $expr
    };
    (@field; $field:ident: None) => {
        None
    };
    (@field; $field:ident: $expr:expr) => {
        Some($expr)
    };
}

macro_rules! test_case {
    // Name.
    (@field=name; name: $value:expr, $($rest:tt)*) => {
        $value
    };
    // Description.
    (@field=description; description: $value:expr, $($rest:tt)*) => {
        Some($value)
    };
    (@field=description;) => {
        None
    };
    // URL.
    (@field=url; url: $value:expr, $($rest:tt)*) => {
        $value
    };
    // Components.
    (@field=components; components: { $($toks:tt)* }, $($rest:tt)*) => {
        components! { $($toks)* }
    };
    // Serialized.
    (@field=serialized; serialized: $value:expr, $($rest:tt)*) => {
        $value
    };
    // Fallback.
    (@field=$name:ident; $field:ident: { $($toks:tt)* }, $($rest:tt)*) => {
        test_case!(@field=$name; $($rest)*)
    };
    // Fallback.
    (@field=$name:ident; $field:ident: $value:expr, $($rest:tt)*) => {
        test_case!(@field=$name; $($rest)*)
    };
    ($($args:tt)*) => {
        TestCase {
            name: Some(test_case!(@field=name; $($args)*)),
            description: test_case!(@field=description; $($args)*),
            url: test_case!(@field=url; $($args)*),
            components: test_case!(@field=components; $($args)*),
            serialized: test_case!(@field=serialized; $($args)*),
        }
    };
}

macro_rules! test_cases {
    ($({$($toks:tt)*}),* $(,)?) => {
        &[ $( test_case! { $($toks)* } ),* ]
    }
}

#[allow(clippy::needless_update)] // For `components!` macro.
pub static TEST_CASES: &[TestCase<'static>] = test_cases![
    {
        name: "host only",
        url: "ldap://ldap.example.com",
        components: {
            host: "ldap.example.com",
        },
        serialized: "ldap://ldap.example.com:389/",
    },
    {
        name: "empty DN",
        url: "ldap://ldap.example.com/",
        components: {
            host: "ldap.example.com",
            dn: "",
        },
        serialized: "ldap://ldap.example.com:389/",
    },
    {
        name: "every field",
        url: "ldap://ldap.example.com:1389/dc=example,dc=com?cn,mail?sub?(uid=joe)?!e1,e2",
        components: {
            host: "ldap.example.com",
            port: 1389,
            dn: "dc=example,dc=com",
            attributes: &["cn", "mail"],
            scope: Scope::Subtree,
            filter: "(uid=joe)",
            extensions: &["!e1", "e2"],
        },
        serialized: "ldap://ldap.example.com:1389/",
    },
    {
        name: "ldaps default port",
        url: "ldaps://secure.example.com/o=x??one",
        components: {
            scheme: Scheme::Ldaps,
            host: "secure.example.com",
            port: 636,
            dn: "o=x",
            scope: Scope::OneLevel,
        },
        serialized: "ldaps://secure.example.com:636/",
    },
    {
        name: "ldapi socket path",
        description: "The host of an ldapi URL is a percent-encoded socket path",
        url: "ldapi://%2Fvar%2Frun%2Fldapi/",
        components: {
            scheme: Scheme::Ldapi,
            host: "/var/run/ldapi",
            dn: "",
        },
        serialized: "ldapi:///var/run/ldapi:389/",
    },
    {
        name: "bracketed IPv6 without port",
        url: "ldap://[::1]/",
        components: {
            host: "::1",
            dn: "",
        },
        serialized: "ldap://[::1]:389/",
    },
    {
        name: "bracketed IPv6 with port",
        url: "ldap://[2001:db8::7]:3389/c=GB?objectClass?one",
        components: {
            host: "2001:db8::7",
            port: 3389,
            dn: "c=GB",
            attributes: &["objectClass"],
            scope: Scope::OneLevel,
        },
        serialized: "ldap://[2001:db8::7]:3389/",
    },
    {
        name: "enclosed with URL prefix",
        url: "<URL:LDAP://host/o=University%20of%20Michigan,c=US>",
        components: {
            host: "host",
            dn: "o=University of Michigan,c=US",
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "scope keywords are case-insensitive",
        url: "ldap://host/o=x??SubTree",
        components: {
            host: "host",
            dn: "o=x",
            scope: Scope::Subtree,
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "onetree scope",
        url: "ldap://host/o=x??onetree",
        components: {
            host: "host",
            dn: "o=x",
            scope: Scope::OneLevel,
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "empty attributes and scope",
        url: "ldap://host/o=x???(cn=*)",
        components: {
            host: "host",
            dn: "o=x",
            filter: "(cn=*)",
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "empty host",
        url: "ldap:///o=x",
        components: {
            dn: "o=x",
        },
        serialized: "ldap://:389/",
    },
    {
        name: "legacy referral",
        description: "Referrals of the form `host:port??dn` put the DN where the scope would be",
        url: "ldap://111.222.333.444:389??cn=abc,o=company",
        components: {
            host: "111.222.333.444",
            dn: "cn=abc,o=company",
        },
        serialized: "ldap://111.222.333.444:389/",
    },
    {
        name: "legacy referral with escaped question marks",
        description: "The `??` is looked for after the port is decoded",
        url: "ldap://host:389%3F%3Fcn=x",
        components: {
            host: "host",
            dn: "cn=x",
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "lenient port",
        description: "The port is converted from its leading digits",
        url: "ldap://host:389x/",
        components: {
            host: "host",
            dn: "",
        },
        serialized: "ldap://host:389/",
    },
    {
        name: "port without digits",
        url: "ldap://host:x/",
        components: {
            host: "host",
            port: 0,
            dn: "",
        },
        serialized: "ldap://host/",
    },
];
