// src/utils.rs
use crate::types::WebScoutError;
use url::Url;

/// Normalize a raw target argument into a validated absolute URL.
///
/// Trailing slashes are trimmed first so path probes resolve against the
/// same base regardless of how the target was spelled.
pub fn normalize_target(raw: &str) -> Result<Url, WebScoutError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(WebScoutError::InvalidTarget("empty target".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| WebScoutError::InvalidTarget(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(WebScoutError::InvalidTarget(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            raw
        )));
    }

    Ok(url)
}

/// Check whether two URLs share an authority (scheme + host + port).
/// Well-known default ports compare equal to explicit ones.
pub fn same_authority(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Resolve a hyperlink target against the page it appeared on.
///
/// Returns `None` for targets that cannot be crawled: unparseable values
/// and schemes other than http/https (mailto:, javascript:, tel:, ...).
/// Fragments are stripped so anchor links collapse onto their page URL.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let mut url = base.join(href.trim()).ok()?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    url.set_fragment(None);
    Some(url)
}
