//! Request-side plumbing: cookie attachment, trace dumping, and the
//! protocol constants surfaced to load scripts.

pub mod debug;
pub mod protocol;
pub mod request;

// Re-exports for convenience
pub use debug::{debug_request, debug_response, HttpDebug};
pub use request::attach_request_cookies;
