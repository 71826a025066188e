//! Request/response trace dumping for debugging load runs.
//!
//! Driven by the per-VU `http_debug` option: empty disables dumping,
//! `"full"` includes bodies, any other non-empty value dumps headers only.
//! Dumps go to stderr tagged with a caller-supplied description so they
//! interleave readably with the tool's other diagnostics.

use crate::base::neterror::NetError;
use http::{HeaderMap, Request, Response};
use std::io::Write;

/// Trace-dump mode derived from the `http_debug` option string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpDebug {
    #[default]
    Off,
    Headers,
    Full,
}

impl HttpDebug {
    pub fn from_option(option: &str) -> Self {
        match option {
            "" => HttpDebug::Off,
            "full" => HttpDebug::Full,
            _ => HttpDebug::Headers,
        }
    }

    pub fn enabled(self) -> bool {
        self != HttpDebug::Off
    }
}

/// Serialize an outgoing request to a human-readable byte stream.
pub fn dump_request<B: AsRef<[u8]>>(
    req: &Request<B>,
    include_body: bool,
) -> Result<Vec<u8>, NetError> {
    let mut out = Vec::new();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    write!(out, "{} {} {:?}\r\n", req.method(), target, req.version())?;
    write_headers(&mut out, req.headers())?;
    if include_body {
        out.write_all(req.body().as_ref())?;
    }
    Ok(out)
}

/// Serialize a received response to a human-readable byte stream.
pub fn dump_response<B: AsRef<[u8]>>(
    res: &Response<B>,
    include_body: bool,
) -> Result<Vec<u8>, NetError> {
    let mut out = Vec::new();
    write!(out, "{:?} {}\r\n", res.version(), res.status())?;
    write_headers(&mut out, res.headers())?;
    if include_body {
        out.write_all(res.body().as_ref())?;
    }
    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, headers: &HeaderMap) -> Result<(), NetError> {
    for (name, value) in headers {
        write!(out, "{}: ", name)?;
        out.write_all(value.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    out.write_all(b"\r\n")?;
    Ok(())
}

/// Dump `req` to stderr when dumping is enabled.
///
/// # Panics
///
/// Panics if serialization fails. A failed dump means the request we are
/// about to send cannot be rendered, which invalidates the whole run
/// rather than just this request.
pub fn debug_request<B: AsRef<[u8]>>(debug: HttpDebug, req: &Request<B>, description: &str) {
    if !debug.enabled() {
        return;
    }
    let dump = match dump_request(req, debug == HttpDebug::Full) {
        Ok(dump) => dump,
        Err(err) => panic!("request dump failed: {err}"),
    };
    log_dump(description, &dump);
}

/// Dump `res` to stderr when dumping is enabled.
///
/// # Panics
///
/// Panics if serialization fails, for the same reason as
/// [`debug_request`].
pub fn debug_response<B: AsRef<[u8]>>(debug: HttpDebug, res: &Response<B>, description: &str) {
    if !debug.enabled() {
        return;
    }
    let dump = match dump_response(res, debug == HttpDebug::Full) {
        Ok(dump) => dump,
        Err(err) => panic!("response dump failed: {err}"),
    };
    log_dump(description, &dump);
}

fn log_dump(description: &str, dump: &[u8]) {
    eprintln!("{}:\n{}\n", description, String::from_utf8_lossy(dump));
}
