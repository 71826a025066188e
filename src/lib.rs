//! # loadnet
//!
//! Cookie state for a scripted HTTP load-generation client.
//!
//! `loadnet` provides the per-virtual-user cookie subsystem that sits between
//! a load script and the HTTP transport: a session-scoped cookie jar, a
//! per-request override merge engine, and the plumbing that writes the merged
//! result onto an outgoing request.
//!
//! ## Features
//!
//! - **Session jars**: one RFC 6265 cookie jar per virtual-user context
//! - **Ad-hoc jars**: caller-owned jars independent of any session
//! - **Override merging**: script-forced cookie values with replace or
//!   append semantics, deterministic wire order
//! - **Trace dumping**: optional request/response dumps for debugging runs
//!
//! ## Quick Start
//!
//! ```rust
//! use loadnet::cookies::{merge_cookies, CookieOverride};
//! use loadnet::http::attach_request_cookies;
//! use loadnet::vu::{VuContext, VuOptions};
//! use std::collections::BTreeMap;
//! use url::Url;
//!
//! let ctx = VuContext::for_vu(VuOptions::default());
//! let url = Url::parse("https://example.com/login").unwrap();
//! ctx.cookie_jar()
//!     .borrow_mut()
//!     .set_from_header(&url, "session=abc123; Path=/");
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert(
//!     "session".to_string(),
//!     CookieOverride::replace("session", "forced"),
//! );
//!
//! let merged = merge_cookies(&ctx.cookie_jar().borrow(), &url, &overrides);
//! let mut headers = http::HeaderMap::new();
//! attach_request_cookies(&mut headers, &merged).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`cookies`] - Cookie records, jars, and the override merge engine
//! - [`http`] - Request cookie attachment, trace dumping, protocol constants
//! - [`vu`] - Virtual-user execution contexts and session jar binding
//!
//! ## Concurrency
//!
//! Jars perform no internal locking. The surrounding scheduler owns the
//! guarantee that a jar instance is never shared across two concurrently
//! running contexts; within one context, response-driven writes and
//! request-driven reads are serialized by execution order.

pub mod base;
pub mod cookies;
pub mod http;
pub mod vu;
