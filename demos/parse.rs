//! An example to parse LDAP URLs from the CLI argument.

use ldap_url::{LdapUrl, LdapUrlList, LDAP_PORT};

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] INPUT

FLAGS:
    -h, --help      Prints this help
    -u, --url       Handle the input as a single LDAP URL (default)
    -l, --list      Handle the input as a list of LDAP URLs
    -H, --hosts     Handle the input as a list of `host[:port]` entries

ARGS:
    <INPUT>         LDAP URL, URL list, or host list
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// Input kind.
#[derive(Debug, Clone, Copy)]
enum Mode {
    /// Single URL.
    Url,
    /// URL list.
    List,
    /// Host list.
    Hosts,
}

impl Default for Mode {
    #[inline]
    fn default() -> Self {
        Self::Url
    }
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Input.
    input: String,
    /// Input kind.
    mode: Mode,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut input = None;
        let mut mode = None;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--url" | "-u" => mode = Some(Mode::Url),
                "--list" | "-l" => mode = Some(Mode::List),
                "--hosts" | "-H" => mode = Some(Mode::Hosts),
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if input.replace(arg).is_some() {
                        die("INPUT can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if input.replace(arg).is_some() {
                eprintln!("ERROR: INPUT can be specified at most once");
            }
        }

        let input = input.unwrap_or_else(|| die("INPUT should be specified"));
        let mode = mode.unwrap_or_default();
        Self { input, mode }
    }
}

fn main() {
    let opt = CliOpt::parse();
    let raw = opt.input.as_str();

    match opt.mode {
        Mode::Url => match LdapUrl::parse(raw) {
            Ok(url) => print_url(&url),
            Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
        },
        Mode::List => match LdapUrlList::parse(raw) {
            Ok(list) => print_list(&list),
            Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
        },
        Mode::Hosts => match LdapUrlList::parse_hosts(raw, LDAP_PORT) {
            Ok(list) => print_list(&list),
            Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
        },
    }
}

fn print_list(list: &LdapUrlList) {
    println!("Successfully parsed {} entries.", list.len());
    println!("Hosts: {}", list.hosts());
    println!("URLs: {}", list.urls());
    for (i, url) in list.iter().enumerate() {
        println!();
        println!("[{}]", i);
        print_url(url);
    }
}

fn print_url(url: &LdapUrl) {
    println!("scheme: {} ({:?}, TLS: {})", url.scheme(), url.protocol(), url.is_tls());
    println!("host: {:?}", url.host());
    println!("port: {}", url.port());
    match url.dn() {
        Some(dn) => println!("dn: {:?}", dn),
        None => println!("dn: (none)"),
    }
    match url.attributes() {
        Some(attrs) => println!("attributes: {:?}", attrs),
        None => println!("attributes: (all)"),
    }
    println!("scope: {}", url.scope());
    match url.filter() {
        Some(filter) => println!("filter: {:?}", filter),
        None => println!("filter: (none)"),
    }
    if let Some(exts) = url.extensions() {
        println!("extensions: {:?}", exts);
        for ext in url.critical_extensions() {
            println!("critical extension: {:?}", ext);
        }
    }
}
