//! Base types and error handling.
//!
//! Provides foundational types shared across the crate:
//! - [`NetError`]: error codes for the request-building boundary
//!
//! [`NetError`]: neterror::NetError

pub mod neterror;

pub use neterror::NetError;
