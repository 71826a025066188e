use crate::cookies::psl;
use crate::cookies::record::Cookie;
use std::collections::HashMap;
use time::OffsetDateTime;
use url::Url;

/// A URL-indexed store of cookies.
///
/// One session jar exists per execution context; ad-hoc jars from
/// [`CookieJar::new`] are owned by whoever created them and never alias a
/// session jar's storage. The jar does no internal locking — a single
/// instance must only be touched from one execution context, which the
/// surrounding scheduler guarantees.
#[derive(Debug, Default)]
pub struct CookieJar {
    // Map<domain, cookies stored under it>, insertion order kept per domain.
    store: HashMap<String, Vec<Cookie>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Store a cookie, replacing any existing cookie with the same name
    /// and path under the same domain.
    pub fn set(&mut self, cookie: Cookie) {
        let entry = self.store.entry(cookie.domain.clone()).or_default();
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        entry.push(cookie);
    }

    /// Parse one `Set-Cookie` response line and store the result.
    ///
    /// This is the transport layer's entry point when processing a
    /// response. Returns `false` when the line is unparseable or declares
    /// a domain the request host may not set a cookie on; both cases are
    /// logged rather than propagated, matching how browsers discard bad
    /// response cookies.
    pub fn set_from_header(&mut self, url: &Url, set_cookie: &str) -> bool {
        let parsed = match cookie::Cookie::parse(set_cookie) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(line = %set_cookie, error = %err, "discarding unparseable Set-Cookie");
                return false;
            }
        };

        let host = url.host_str().unwrap_or("").to_lowercase();
        let (domain, host_only) = match parsed.domain() {
            Some(declared) => {
                let declared = declared.trim_start_matches('.').to_lowercase();
                if !psl::domain_permitted(&declared, &host) {
                    tracing::warn!(domain = %declared, host = %host, "rejecting cookie domain");
                    return false;
                }
                (declared, false)
            }
            None => (host, true),
        };

        let now = OffsetDateTime::now_utc().unix_timestamp();
        // The cookie crate clamps non-positive Max-Age to zero; a zero
        // duration therefore means "expire immediately".
        let max_age = match parsed.max_age() {
            Some(age) if age.is_zero() => -1,
            Some(age) => age.whole_seconds(),
            None => 0,
        };
        let expires = parsed
            .expires()
            .and_then(|exp| exp.datetime())
            .map(|at| at.unix_timestamp())
            .unwrap_or(if max_age > 0 { now + max_age } else { 0 });

        self.set(Cookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path: parsed.path().unwrap_or("/").to_string(),
            http_only: parsed.http_only().unwrap_or(false),
            secure: parsed.secure().unwrap_or(false),
            max_age,
            expires,
            host_only,
        });
        true
    }

    /// All unexpired cookies matching `url` by domain, path, and secure
    /// attributes.
    ///
    /// Results are ordered longest path first; cookies with equal path
    /// lengths keep their insertion order, which is the per-name order the
    /// merge engine preserves.
    pub fn cookies_for_url(&self, url: &Url) -> Vec<Cookie> {
        let host = url.host_str().unwrap_or("");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut matched = Vec::new();

        for key in Self::candidate_domains(host) {
            let Some(cookies) = self.store.get(&key) else {
                continue;
            };
            for cookie in cookies {
                if !Self::domain_match(cookie, host) {
                    continue;
                }
                if !Self::path_match(&cookie.path, url.path()) {
                    continue;
                }
                if cookie.secure && url.scheme() != "https" {
                    continue;
                }
                if cookie.is_expired(now) {
                    continue;
                }
                matched.push(cookie.clone());
            }
        }

        // Stable: equal path lengths keep insertion order.
        matched.sort_by(|a, b| b.path.len().cmp(&a.path.len()));
        matched
    }

    /// Total number of stored cookies.
    pub fn len(&self) -> usize {
        self.store.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.store.values().all(Vec::is_empty)
    }

    /// Remove every stored cookie.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// The host itself plus every parent domain a cookie could have been
    /// stored under (bare TLDs excluded).
    fn candidate_domains(host: &str) -> Vec<String> {
        let mut domains = vec![host.to_string()];
        let mut rest = host;
        while let Some(dot) = rest.find('.') {
            rest = &rest[dot + 1..];
            if rest.contains('.') {
                domains.push(rest.to_string());
            }
        }
        domains
    }

    /// RFC 6265 domain matching.
    fn domain_match(cookie: &Cookie, host: &str) -> bool {
        if cookie.host_only {
            return cookie.domain.eq_ignore_ascii_case(host);
        }

        let domain = cookie.domain.trim_start_matches('.');
        if host.eq_ignore_ascii_case(domain) {
            return true;
        }

        // Host must end with ".domain".
        host.len() > domain.len()
            && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
            && host[host.len() - domain.len()..].eq_ignore_ascii_case(domain)
    }

    /// RFC 6265 path matching.
    fn path_match(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }
        request_path.starts_with(cookie_path)
            && (cookie_path.ends_with('/')
                || request_path.as_bytes().get(cookie_path.len()) == Some(&b'/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar_with(lines: &[(&str, &str)]) -> CookieJar {
        let mut jar = CookieJar::new();
        for (url, line) in lines {
            let url = Url::parse(url).unwrap();
            assert!(jar.set_from_header(&url, line));
        }
        jar
    }

    #[test]
    fn test_set_replaces_same_name_and_path() {
        let jar = jar_with(&[
            ("https://example.com/", "id=first"),
            ("https://example.com/", "id=second"),
        ]);
        let url = Url::parse("https://example.com/").unwrap();
        let cookies = jar.cookies_for_url(&url);
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].value, "second");
    }

    #[test]
    fn test_same_name_different_paths_coexist() {
        let jar = jar_with(&[
            ("https://example.com/", "id=root; Path=/"),
            ("https://example.com/app", "id=app; Path=/app"),
        ]);
        let url = Url::parse("https://example.com/app/page").unwrap();
        let cookies = jar.cookies_for_url(&url);
        assert_eq!(cookies.len(), 2);
        // Longest path first.
        assert_eq!(cookies[0].value, "app");
        assert_eq!(cookies[1].value, "root");
    }

    #[test]
    fn test_domain_cookie_matches_subdomain() {
        let jar = jar_with(&[("https://a.example.com/", "d=v; Domain=example.com")]);
        let sub = Url::parse("https://b.example.com/").unwrap();
        assert_eq!(jar.cookies_for_url(&sub).len(), 1);
    }

    #[test]
    fn test_host_only_cookie_exact_host() {
        let jar = jar_with(&[("https://a.example.com/", "h=v")]);
        let same = Url::parse("https://a.example.com/").unwrap();
        let other = Url::parse("https://b.example.com/").unwrap();
        assert_eq!(jar.cookies_for_url(&same).len(), 1);
        assert_eq!(jar.cookies_for_url(&other).len(), 0);
    }

    #[test]
    fn test_rejects_public_suffix_domain() {
        let mut jar = CookieJar::new();
        let url = Url::parse("https://example.com/").unwrap();
        assert!(!jar.set_from_header(&url, "evil=1; Domain=com"));
        assert!(jar.is_empty());
    }

    #[test]
    fn test_rejects_unrelated_domain() {
        let mut jar = CookieJar::new();
        let url = Url::parse("https://example.com/").unwrap();
        assert!(!jar.set_from_header(&url, "evil=1; Domain=other.com"));
    }

    #[test]
    fn test_secure_cookie_not_sent_over_http() {
        let jar = jar_with(&[("https://example.com/", "s=v; Secure")]);
        let https = Url::parse("https://example.com/").unwrap();
        let http = Url::parse("http://example.com/").unwrap();
        assert_eq!(jar.cookies_for_url(&https).len(), 1);
        assert_eq!(jar.cookies_for_url(&http).len(), 0);
    }

    #[test]
    fn test_expired_cookie_filtered() {
        let mut jar = CookieJar::new();
        let url = Url::parse("https://example.com/").unwrap();
        jar.set_from_header(&url, "gone=1; Max-Age=-1");
        assert_eq!(jar.cookies_for_url(&url).len(), 0);
    }

    #[test]
    fn test_max_age_sets_expiry() {
        let mut jar = CookieJar::new();
        let url = Url::parse("https://example.com/").unwrap();
        jar.set_from_header(&url, "keep=1; Max-Age=3600");
        let cookies = jar.cookies_for_url(&url);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].expires > 0);
        assert_eq!(cookies[0].max_age, 3600);
    }

    #[test]
    fn test_unparseable_line_discarded() {
        let mut jar = CookieJar::new();
        let url = Url::parse("https://example.com/").unwrap();
        assert!(!jar.set_from_header(&url, "no-equals-sign"));
        assert!(jar.is_empty());
    }

    #[test]
    fn test_path_prefix_needs_boundary() {
        let jar = jar_with(&[("https://example.com/foo", "p=v; Path=/foo")]);
        let boundary = Url::parse("https://example.com/foo/bar").unwrap();
        let not_boundary = Url::parse("https://example.com/foobar").unwrap();
        assert_eq!(jar.cookies_for_url(&boundary).len(), 1);
        assert_eq!(jar.cookies_for_url(&not_boundary).len(), 0);
    }

    #[test]
    fn test_clear() {
        let mut jar = jar_with(&[("https://example.com/", "a=1")]);
        assert_eq!(jar.len(), 1);
        jar.clear();
        assert!(jar.is_empty());
    }
}
