/// Userinfo and host/port pieces of an authority section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authority<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

/// Split `[user[:pass]@]host[:port]`.
/// Userinfo ends at the last `@`; the password starts after the first `:` in it.
pub fn split_authority(authority: &str) -> Authority<'_> {
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (username, password) = match userinfo {
        Some(userinfo) => match userinfo.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass)),
            None => (Some(userinfo), None),
        },
        None => (None, None),
    };

    let (host, port) = parse_host_port_parts(host_port);

    Authority {
        username,
        password,
        host,
        port,
    }
}

/// Parse host string into hostname and optional port parts.
/// A bracketed host is kept whole; the port may only follow the `]`.
fn parse_host_port_parts(host: &str) -> (&str, Option<&str>) {
    if host.starts_with('[') {
        if let Some(bracket_end) = host.find(']') {
            let bracketed = &host[..=bracket_end];
            let port = host[bracket_end + 1..].strip_prefix(':');
            return (bracketed, port);
        }
        return (host, None);
    }

    match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    }
}
