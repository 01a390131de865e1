use std::fmt;

/// Result type for netview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning decoded resources into responses
#[derive(Debug)]
pub enum Error {
    /// Input stream is not valid JSON or does not fit the expected shape
    Decode(serde_json::Error),

    /// Object belongs to a different resource kind than the transformer was built for
    UnexpectedKind { expected: String, found: String },

    /// Reading the input stream failed
    Io(std::io::Error),
}

impl Error {
    pub fn unexpected_kind(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::UnexpectedKind {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::UnexpectedKind { expected, found } => write!(
                f,
                "Unexpected resource kind: expected {}, found {}",
                expected, found
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::UnexpectedKind { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Decode(err)
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
