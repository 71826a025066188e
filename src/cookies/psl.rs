//! Supercookie guard for explicit cookie domains.
//!
//! A `Set-Cookie` carrying a `Domain` attribute may not target a public
//! suffix (setting a cookie on `.com` would leak it to every site), and
//! the request host must sit at or below the declared domain. Uses
//! Mozilla's Public Suffix List via the `psl` crate.

use psl::{List, Psl};

/// True if `domain` is itself a public suffix (e.g. "com", "co.uk").
pub fn is_public_suffix(domain: &str) -> bool {
    let lower = domain.to_lowercase();
    List.suffix(lower.as_bytes())
        .is_some_and(|suffix| suffix.as_bytes() == lower.as_bytes())
}

/// Whether a request to `host` is allowed to set a cookie on
/// `cookie_domain`. The leading dot, if any, is ignored.
pub fn domain_permitted(cookie_domain: &str, host: &str) -> bool {
    let domain = cookie_domain
        .strip_prefix('.')
        .unwrap_or(cookie_domain)
        .to_lowercase();
    let host = host.to_lowercase();

    if is_public_suffix(&domain) {
        return false;
    }

    host == domain || host.ends_with(&format!(".{domain}"))
}
