//! Cookie storage and per-request override merging.
//!
//! This module holds the stateful half of the client: the cookie jar a
//! virtual user accumulates across requests, and the merge engine that
//! reconciles jar contents with script-declared overrides right before a
//! request is built.
//!
//! # Architecture
//!
//! | Piece | Responsibility |
//! |-------|----------------|
//! | [`Cookie`](record::Cookie) | Single stored cookie |
//! | [`CookieJar`](jar::CookieJar) | URL-indexed store with RFC 6265 matching |
//! | [`merge_cookies`](merge::merge_cookies) | Jar + overrides → per-request cookie set |
//! | [`psl`] | Supercookie guard for explicit `Domain` attributes |
//!
//! The jar performs no locking: the surrounding scheduler guarantees a jar
//! is only touched from its own execution context, and within a context
//! reads and writes are serialized by execution order.
//!
//! # Merging overrides
//!
//! ```rust
//! use loadnet::cookies::{merge_cookies, CookieJar, CookieOverride};
//! use std::collections::BTreeMap;
//! use url::Url;
//!
//! let mut jar = CookieJar::new();
//! let url = Url::parse("https://example.com/").unwrap();
//! jar.set_from_header(&url, "session=stored");
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert(
//!     "session".to_string(),
//!     CookieOverride::replace("session", "forced"),
//! );
//!
//! let merged = merge_cookies(&jar, &url, &overrides);
//! assert_eq!(merged.values("session"), Some(&["forced".to_string()][..]));
//! ```

pub mod jar;
pub mod merge;
pub mod psl;
pub mod record;

pub use jar::CookieJar;
pub use merge::{apply_override, merge_cookies, CookieOverride, MergedCookieSet};
pub use record::Cookie;
