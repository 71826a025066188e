//! Protocol constants surfaced to load scripts.
//!
//! Flat data only: the method names scripts pass to the request API, and
//! the OCSP / TLS labels the transport layer reports back on responses.

pub const HTTP_METHOD_GET: &str = "GET";
pub const HTTP_METHOD_POST: &str = "POST";
pub const HTTP_METHOD_PUT: &str = "PUT";
pub const HTTP_METHOD_DELETE: &str = "DELETE";
pub const HTTP_METHOD_HEAD: &str = "HEAD";
pub const HTTP_METHOD_PATCH: &str = "PATCH";
pub const HTTP_METHOD_OPTIONS: &str = "OPTIONS";

pub const OCSP_STATUS_GOOD: &str = "good";
pub const OCSP_STATUS_REVOKED: &str = "revoked";
pub const OCSP_STATUS_SERVER_FAILED: &str = "server_failed";
pub const OCSP_STATUS_UNKNOWN: &str = "unknown";

pub const OCSP_REASON_UNSPECIFIED: &str = "unspecified";
pub const OCSP_REASON_KEY_COMPROMISE: &str = "key_compromise";
pub const OCSP_REASON_CA_COMPROMISE: &str = "ca_compromise";
pub const OCSP_REASON_AFFILIATION_CHANGED: &str = "affiliation_changed";
pub const OCSP_REASON_SUPERSEDED: &str = "superseded";
pub const OCSP_REASON_CESSATION_OF_OPERATION: &str = "cessation_of_operation";
pub const OCSP_REASON_CERTIFICATE_HOLD: &str = "certificate_hold";
pub const OCSP_REASON_REMOVE_FROM_CRL: &str = "remove_from_crl";
pub const OCSP_REASON_PRIVILEGE_WITHDRAWN: &str = "privilege_withdrawn";
pub const OCSP_REASON_AA_COMPROMISE: &str = "aa_compromise";

pub const SSL_3_0: &str = "ssl3.0";
pub const TLS_1_0: &str = "tls1.0";
pub const TLS_1_1: &str = "tls1.1";
pub const TLS_1_2: &str = "tls1.2";
