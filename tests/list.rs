//! URL and host lists.

use ldap_url::format::ToStringFallible;
use ldap_url::{ErrorKind, LdapUrl, LdapUrlList, Scheme};

#[test]
fn url_list_keeps_input_order() {
    let list = LdapUrlList::parse("ldap://a/ ldaps://b/,ldapi://c/").expect("valid list");
    let schemes: Vec<_> = list.iter().map(LdapUrl::scheme).collect();
    assert_eq!(schemes, [Scheme::Ldap, Scheme::Ldaps, Scheme::Ldapi]);
    let hosts: Vec<_> = list.iter().map(LdapUrl::host).collect();
    assert_eq!(hosts, ["a", "b", "c"]);
    assert_eq!(list.urls(), "ldap://a:389/ ldaps://b:636/ ldapi://c:389/");
}

#[test]
fn url_list_skips_empty_entries() {
    let list = LdapUrlList::parse(" ,, ldap://a/ , ,ldap://b/ ").expect("valid list");
    assert_eq!(list.len(), 2);
    assert!(LdapUrlList::parse("").expect("empty list").is_empty());
}

#[test]
fn url_list_fails_as_a_whole() {
    let err = LdapUrlList::parse("ldap://a/ ldap://b/o=x??bogus ldap://c/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadScope);
    let err = LdapUrlList::parse("ldap://a/ <ldap://b/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadEnclosure);
}

#[test]
fn host_list() {
    let list = LdapUrlList::parse_hosts("a.example.com b.example.com:1389,[::1]:636 fe80::2", 389)
        .expect("valid host list");
    let pairs: Vec<_> = list.iter().map(|url| (url.host(), url.port())).collect();
    assert_eq!(
        pairs,
        [
            ("a.example.com", 389),
            ("b.example.com", 1389),
            ("::1", 636),
            ("fe80::2", 389),
        ]
    );
    assert!(list.iter().all(|url| url.scheme() == Scheme::Ldap));
    assert_eq!(
        list.hosts(),
        "a.example.com:389 b.example.com:1389 [::1]:636 [fe80::2]:389"
    );
    assert_eq!(
        list.urls(),
        "ldap://a.example.com:389/ ldap://b.example.com:1389/ ldap://[::1]:636/ ldap://[fe80::2]:389/"
    );
}

#[test]
fn host_list_with_zero_default_port() {
    let list = LdapUrlList::parse_hosts("a b:10", 0).expect("valid host list");
    assert_eq!(list.hosts(), "a b:10");
    assert_eq!(list.urls(), "ldap://a/ ldap://b:10/");
}

#[test]
fn bad_host_list() {
    for hosts in ["a [::1", "[::1]junk", "a:70000"] {
        assert_eq!(
            LdapUrlList::parse_hosts(hosts, 389).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument),
            "{:?}",
            hosts
        );
    }
}

#[test]
fn empty_list_serializes_to_empty_string() {
    let list = LdapUrlList::new();
    assert_eq!(list.hosts(), "");
    assert_eq!(list.urls(), "");
    assert_eq!(list.first(), None);
}

#[test]
fn duplicate_then_drop_original() {
    let original = LdapUrlList::parse("ldap://a/o=x?cn?sub?(cn=*)?e ldaps://b/").expect("valid list");
    let copy = original.try_clone().expect("enough memory");
    assert_eq!(copy, original);
    drop(original);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.first().and_then(LdapUrl::filter), Some("(cn=*)"));
}

#[test]
fn duplicate_is_independent() {
    let original = LdapUrlList::parse("ldap://a/ ldap://b/").expect("valid list");
    let mut copy = original.try_clone().expect("enough memory");
    copy.push(LdapUrl::parse("ldap://c/").expect("valid"));
    let mut urls: Vec<LdapUrl> = copy.into();
    urls[0].set_host("changed");
    assert_eq!(original.urls(), "ldap://a:389/ ldap://b:389/");
    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0].host(), "changed");
}

#[test]
fn collect_and_iterate() {
    let list: LdapUrlList = ["ldap://a/", "ldap://b/"]
        .iter()
        .map(|s| LdapUrl::parse(s).expect("valid"))
        .collect();
    let mut n = 0;
    for url in &list {
        assert_eq!(url.dn(), Some(""));
        n += 1;
    }
    assert_eq!(n, 2);
    assert_eq!(list.as_slice().len(), 2);
    assert_eq!(list.into_iter().count(), 2);
}

#[test]
fn fallible_serialization() {
    let list = LdapUrlList::parse_hosts("a:1 b:2", 389).expect("valid host list");
    assert_eq!(list.hosts().try_to_string().as_deref(), Ok("a:1 b:2"));
    assert_eq!(
        list.urls().try_to_string().as_deref(),
        Ok("ldap://a:1/ ldap://b:2/")
    );
}
