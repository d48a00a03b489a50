use crate::{UrlError, UrlResult};

/// The components of a URL that link classification cares about.
///
/// This is a string-level split, not a full parse: hosts keep their original
/// case, a bare origin has an empty path, and a scheme-less input is treated
/// as all path. Those properties are exactly what the resolver's
/// classification rules are defined in terms of, which is why this module
/// does not go through a normalizing URL parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    pub path: &'a str,
}

/// Splits a URL string into scheme, host, port, and path.
///
/// Handles three shapes:
/// - `scheme://authority/path` - full absolute URL
/// - `//authority/path` - protocol-relative URL (no scheme)
/// - anything else - no scheme, no host; the whole string is the path
///
/// A query string or fragment is not part of the path.
pub(crate) fn split_url(url: &str) -> UrlParts<'_> {
    if let Some(rest) = url.strip_prefix("//") {
        let (authority, tail) = split_authority(rest);
        let (host, port) = split_host_port(authority);
        return UrlParts {
            scheme: None,
            host,
            port,
            path: strip_query_fragment(tail),
        };
    }

    if let Some(colon) = url.find(':') {
        let candidate = &url[..colon];
        if is_scheme(candidate) {
            let rest = &url[colon + 1..];
            if let Some(rest) = rest.strip_prefix("//") {
                let (authority, tail) = split_authority(rest);
                let (host, port) = split_host_port(authority);
                return UrlParts {
                    scheme: Some(candidate),
                    host,
                    port,
                    path: strip_query_fragment(tail),
                };
            }

            // Opaque form such as `mailto:user@example.com`
            return UrlParts {
                scheme: Some(candidate),
                host: None,
                port: None,
                path: strip_query_fragment(rest),
            };
        }
    }

    UrlParts {
        scheme: None,
        host: None,
        port: None,
        path: strip_query_fragment(url),
    }
}

/// Checks whether a string is a plausible URL scheme
///
/// Schemes start with an ASCII letter and continue with letters, digits,
/// `+`, `-`, or `.`. This keeps `sub.example.com/a:b` from being read as a
/// scheme named `sub.example.com/a`.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

/// Splits `authority[/path...]` at the end of the authority component
fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find(['/', '?', '#']) {
        Some(end) => rest.split_at(end),
        None => (rest, ""),
    }
}

/// Splits an authority into host and optional port
fn split_host_port(authority: &str) -> (Option<&str>, Option<&str>) {
    if authority.is_empty() {
        return (None, None);
    }

    match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            (Some(host), Some(port))
        }
        _ => (Some(authority), None),
    }
}

/// Drops everything from the first `?` or `#` onwards
fn strip_query_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Returns the origin of an absolute URL: `scheme://host[:port]`
///
/// The scheme is lower-cased; the host is kept verbatim, including its
/// case. The origin is the unit of the internal/external decision, so two
/// URLs that differ only in scheme have different origins.
///
/// # Arguments
///
/// * `url` - An absolute URL
///
/// # Returns
///
/// * `Ok(String)` - The origin, with no trailing slash and no path
/// * `Err(UrlError)` - The URL has no scheme or no host
///
/// # Examples
///
/// ```
/// use sitegrep::url::base_origin;
///
/// assert_eq!(
///     base_origin("HTTps://www.example.com/a/b").unwrap(),
///     "https://www.example.com"
/// );
/// assert_eq!(
///     base_origin("http://www.example.com:8080/online/").unwrap(),
///     "http://www.example.com:8080"
/// );
/// assert!(base_origin("../../../some-page.html").is_err());
/// ```
pub fn base_origin(url: &str) -> UrlResult<String> {
    let parts = split_url(url);

    let scheme = parts
        .scheme
        .ok_or_else(|| UrlError::MissingScheme(url.to_string()))?;
    let host = parts
        .host
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

    let mut origin = format!("{}://{}", scheme.to_ascii_lowercase(), host);
    if let Some(port) = parts.port {
        origin.push(':');
        origin.push_str(port);
    }

    Ok(origin)
}

/// Returns the host component of a URL, or `None` if there is none
///
/// Protocol-relative URLs (`//example.com/news`) have a host; scheme-less
/// strings such as `sub.example.com/online/` do not - without a scheme or a
/// leading `//` the whole string is a path.
pub fn host(url: &str) -> Option<&str> {
    split_url(url).host
}

/// Returns the path component of a URL, empty if absent
///
/// A bare origin (`https://example.com`) has an empty path; with a trailing
/// slash the path is `/`. A relative reference is all path.
pub fn path(url: &str) -> &str {
    split_url(url).path
}
