use crate::base::neterror::NetError;
use crate::cookies::merge::MergedCookieSet;
use http::header::{HeaderValue, COOKIE};
use http::HeaderMap;

/// Write a merged cookie set onto an outgoing request's headers.
///
/// Appends one `Cookie:` field per (name, value) pair, in the set's
/// iteration order, and never deduplicates — sending multiple same-named
/// cookie fields is intentional and must survive to the wire. Values are
/// percent-encoded, so script-supplied bytes cannot produce an invalid
/// header; the `Result` covers only that encoding boundary.
pub fn attach_request_cookies(
    headers: &mut HeaderMap,
    merged: &MergedCookieSet,
) -> Result<(), NetError> {
    for (name, value) in merged.pairs() {
        let encoded = cookie::Cookie::new(name, value).encoded().to_string();
        let field = HeaderValue::from_str(&encoded).map_err(|_| NetError::InvalidHeader)?;
        headers.append(COOKIE, field);
    }
    Ok(())
}
