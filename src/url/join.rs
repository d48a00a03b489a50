//! Relative-href joining
//!
//! Turns a relative href into an absolute URL against the page it was found
//! on. Two directions: downstream (`articles/x`, deeper than or beside the
//! current page) and upstream (`../x`, climbing towards the site root).
//!
//! The joins are literal string edits, not normalizing URL resolution.
//! Two behaviors here are deliberate and must stay as-is: a downstream
//! join that falls through to last-segment replacement forces a scheme
//! token that does not already start with `http` to the literal `http`,
//! and an upstream join that consumes every path segment still emits both
//! separator slashes, producing `origin//rest`.

use crate::url::parts::{base_origin, path};
use crate::UrlResult;

/// Joins a downstream relative href (no leading `/`) onto a page URL.
///
/// Three cases, in order:
/// 1. The page is the site root (with or without a trailing slash):
///    `origin + "/" + href`.
/// 2. The page URL ends with `/`: append the href directly.
/// 3. Otherwise replace the page URL's final path segment with the href.
///
/// In case 3 only, a result whose first four characters are not `http` has
/// everything up to its last `://` rewritten to `http`.
///
/// # Arguments
///
/// * `href` - The relative href value
/// * `page_url` - Absolute URL of the page containing the href
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError)` - `page_url` is not an absolute URL
pub(crate) fn downstream_join(href: &str, page_url: &str) -> UrlResult<String> {
    let origin = base_origin(page_url)?;

    if page_url.trim_matches('/') == origin {
        return Ok(format!("{}/{}", origin, href));
    }

    if page_url.ends_with('/') {
        return Ok(format!("{}{}", page_url, href));
    }

    // Replace everything after the final slash with the href. An absolute
    // URL always contains a slash, so rfind cannot miss.
    let directory = match page_url.rfind('/') {
        Some(idx) => &page_url[..idx],
        None => page_url,
    };
    let mut absolute = format!("{}/{}", directory, href);

    if !absolute.starts_with("http") {
        if let Some(idx) = absolute.rfind("://") {
            absolute = format!("http{}", &absolute[idx..]);
        }
    }

    Ok(absolute)
}

/// Joins an upstream relative href (leading `..` segments) onto a page URL.
///
/// Every `..` segment anywhere in the href counts as one step up. The page
/// URL's path is split into segments (the final segment included); if there
/// are more steps than segments the join fails. Otherwise the surviving
/// segments are glued between the origin and the href's remainder - the
/// href with its leading run of `.` and `/` characters removed.
///
/// # Arguments
///
/// * `href` - The relative href value, starting with `..`
/// * `page_url` - Absolute URL of the page containing the href
///
/// # Returns
///
/// * `Ok(Some(String))` - The absolute URL
/// * `Ok(None)` - More `..` steps than the page's path has segments
/// * `Err(UrlError)` - `page_url` is not an absolute URL
pub(crate) fn upstream_join(href: &str, page_url: &str) -> UrlResult<Option<String>> {
    let origin = base_origin(page_url)?;

    let back_steps = count_back_steps(href);
    let trimmed = path(page_url).trim_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    if back_steps > segments.len() {
        return Ok(None);
    }

    let kept = &segments[..segments.len() - back_steps];
    let remainder = href.trim_start_matches(|c| c == '.' || c == '/');

    Ok(Some(format!("{}/{}/{}", origin, kept.join("/"), remainder)))
}

/// Counts the `..` segments in an href, wherever they appear
pub(crate) fn count_back_steps(href: &str) -> usize {
    href.split('/').filter(|segment| *segment == "..").count()
}
