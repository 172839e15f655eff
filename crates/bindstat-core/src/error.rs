//! Shared error type across bindstat crates.

use thiserror::Error;

/// Stable error codes, used as metric label values and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Version check answered with a server error.
    Detection,
    /// Connect/read failure or deadline exceeded.
    Transport,
    /// Response body is not a valid statistics document.
    Unmarshal,
    /// An RTT bucket name could not be parsed.
    HistogramParse,
    /// Invalid exporter configuration.
    Config,
}

impl ErrorKind {
    /// String representation used in labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Detection => "detection",
            ErrorKind::Transport => "transport",
            ErrorKind::Unmarshal => "unmarshal",
            ErrorKind::HistogramParse => "histogram_parse",
            ErrorKind::Config => "config",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BindStatError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum BindStatError {
    #[error("version detection failed: upstream returned HTTP {status}")]
    Detection { status: u16 },
    #[error("transport: {0}")]
    Transport(String),
    #[error("unmarshal ({schema}): {detail}")]
    Unmarshal { schema: &'static str, detail: String },
    #[error("histogram parse (view={view}): could not parse RTT bucket {bucket:?}")]
    HistogramParse { view: String, bucket: String },
    #[error("config: {0}")]
    Config(String),
}

impl BindStatError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindStatError::Detection { .. } => ErrorKind::Detection,
            BindStatError::Transport(_) => ErrorKind::Transport,
            BindStatError::Unmarshal { .. } => ErrorKind::Unmarshal,
            BindStatError::HistogramParse { .. } => ErrorKind::HistogramParse,
            BindStatError::Config(_) => ErrorKind::Config,
        }
    }

    /// Fatal errors abort the scrape cycle and report `up = 0`.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Detection | ErrorKind::Transport | ErrorKind::Unmarshal
        )
    }
}
