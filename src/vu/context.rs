//! Execution-context handles and per-VU state.
//!
//! A load run has two kinds of scope: the init stage, which evaluates the
//! script once with no virtual user bound, and the per-VU execution scope,
//! which owns the session cookie jar and the options the subsystem
//! consumes. Cookie access from the init stage is a script bug, surfaced
//! as a panic rather than a recoverable error.

use crate::cookies::jar::CookieJar;
use crate::http::debug::HttpDebug;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Per-VU configuration consumed by this subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VuOptions {
    /// Trace-dump option: empty disables dumping, `"full"` includes
    /// bodies, any other non-empty value dumps headers only.
    pub http_debug: String,
}

impl VuOptions {
    /// The effective trace-dump mode.
    pub fn http_debug(&self) -> HttpDebug {
        HttpDebug::from_option(&self.http_debug)
    }
}

/// State bound to one running virtual user.
///
/// Owns exactly one session jar. The jar sits behind a `RefCell` because
/// response processing mutates it while request building reads it; the
/// two are serialized by the context's execution order, never by a lock.
pub struct VuState {
    cookie_jar: RefCell<CookieJar>,
    options: VuOptions,
}

impl VuState {
    fn new(options: VuOptions) -> Self {
        Self {
            cookie_jar: RefCell::new(CookieJar::new()),
            options,
        }
    }

    /// The session jar bound to this VU.
    pub fn cookie_jar(&self) -> &RefCell<CookieJar> {
        &self.cookie_jar
    }

    pub fn options(&self) -> &VuOptions {
        &self.options
    }
}

/// Handle identifying one execution scope.
pub struct VuContext {
    state: Option<VuState>,
}

impl VuContext {
    /// The init-stage context. No VU state is bound; cookie access
    /// through this context panics.
    pub fn init() -> Self {
        Self { state: None }
    }

    /// A context for one running virtual user, owning a fresh session jar
    /// for the VU's lifetime.
    pub fn for_vu(options: VuOptions) -> Self {
        Self {
            state: Some(VuState::new(options)),
        }
    }

    /// The bound VU state.
    ///
    /// # Panics
    ///
    /// Panics when no VU is bound, i.e. when the subsystem is invoked
    /// from the init stage. That is a usage defect upstream, not a
    /// condition a script can recover from.
    pub fn state(&self) -> &VuState {
        self.state
            .as_ref()
            .expect("cookie state accessed outside of a running VU")
    }

    /// The session jar bound to this context. Repeated calls return the
    /// same jar for the context's lifetime.
    ///
    /// # Panics
    ///
    /// Panics when no VU is bound; see [`VuContext::state`].
    pub fn cookie_jar(&self) -> &RefCell<CookieJar> {
        self.state().cookie_jar()
    }

    /// A fresh ad-hoc jar, owned entirely by the caller and independent
    /// of this context's session jar.
    pub fn new_jar(&self) -> CookieJar {
        CookieJar::new()
    }
}
