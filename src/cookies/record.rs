/// A single stored cookie.
///
/// Immutable once stored; the jar replaces a record wholesale rather than
/// mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub http_only: bool,
    pub secure: bool,
    /// `Max-Age` in seconds. `0` means the attribute was absent; negative
    /// means expire immediately.
    pub max_age: i64,
    /// Expiry as epoch seconds. `0` means a session cookie.
    pub expires: i64,
    /// Set when the cookie carried no `Domain` attribute; such cookies
    /// match only the exact request host.
    pub host_only: bool,
}

impl Cookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            http_only: false,
            secure: false,
            max_age: 0,
            expires: 0,
            host_only: true,
        }
    }

    pub fn is_expired(&self, now_epoch: i64) -> bool {
        if self.max_age < 0 {
            return true;
        }
        self.expires > 0 && self.expires < now_epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_never_expires() {
        let c = Cookie::new("id", "1", "example.com", "/");
        assert!(!c.is_expired(i64::MAX));
    }

    #[test]
    fn test_expired_by_epoch() {
        let mut c = Cookie::new("id", "1", "example.com", "/");
        c.expires = 100;
        assert!(c.is_expired(101));
        assert!(!c.is_expired(99));
    }

    #[test]
    fn test_negative_max_age_expires_immediately() {
        let mut c = Cookie::new("id", "1", "example.com", "/");
        c.max_age = -1;
        assert!(c.is_expired(0));
    }
}
