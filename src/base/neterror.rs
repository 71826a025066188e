use thiserror::Error;

/// Errors surfaced while building or dumping a request.
///
/// The override merge itself is a total function and has no error path;
/// errors arise only at the header-encoding boundary and in the trace
/// dump serializer.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    #[error("Invalid header")]
    InvalidHeader,
    #[error("Dump failed: {message}")]
    DumpFailed { message: String },
}

impl NetError {
    pub fn dump_failed(message: impl Into<String>) -> Self {
        NetError::DumpFailed {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(err: std::io::Error) -> Self {
        NetError::dump_failed(err.to_string())
    }
}
