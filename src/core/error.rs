use thiserror::Error;

/// Errors that can occur while configuring, validating, or rendering an order.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OrderError {
    /// The delimiter configuration is degenerate (duplicate or unusable characters).
    #[error("invalid separator configuration: {0}")]
    InvalidSeparator(String),

    /// The order failed pre-flight validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A rendered segment exceeds the configured maximum length.
    #[error("segment {tag} is {length} characters long (limit {limit})")]
    SegmentTooLong {
        tag: String,
        length: usize,
        limit: usize,
    },

    /// The caller's cancellation signal fired before assembly completed.
    #[error("order generation cancelled")]
    Cancelled,

    /// A segment could not be built or serialized.
    #[error("failed to build {segment}: {source}")]
    Segment {
        /// Segment being processed, e.g. "buyer NAD" or "LIN for line 3".
        segment: String,
        #[source]
        source: Box<OrderError>,
    },

    /// A persistence sink rejected the rendered interchange.
    #[error("sink error: {0}")]
    Sink(String),
}

impl OrderError {
    /// Wrap `self` with the name of the segment being processed.
    pub fn in_segment(self, segment: impl Into<String>) -> Self {
        Self::Segment {
            segment: segment.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all segment context layers removed.
    pub fn root_cause(&self) -> &OrderError {
        match self {
            Self::Segment { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A single validation failure with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "buyer.lines[2]").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path, e.g. `name` → `buyer.name`.
    pub(crate) fn nested(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            message: self.message,
        }
    }
}
