//! Error types for the circular image widget

/// Errors returned by the widget's validated setters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircularImageError {
    /// A size-like argument was negative
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Value that was rejected
        value: i64,
    },
}

impl CircularImageError {
    pub(crate) fn negative(name: &'static str, value: impl Into<i64>) -> Self {
        CircularImageError::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for CircularImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircularImageError::InvalidArgument { name, value } => {
                write!(f, "Invalid argument: {} cannot be less than zero (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for CircularImageError {}

/// Errors that can occur while loading widget attributes from disk
#[derive(Debug, Clone)]
pub enum AttributesError {
    Io(String),
    Parse(String),
    Invalid(CircularImageError),
}

impl std::fmt::Display for AttributesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributesError::Io(e) => write!(f, "IO error: {}", e),
            AttributesError::Parse(e) => write!(f, "Parse error: {}", e),
            AttributesError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AttributesError {}

impl From<CircularImageError> for AttributesError {
    fn from(err: CircularImageError) -> Self {
        AttributesError::Invalid(err)
    }
}

pub type Result<T> = std::result::Result<T, CircularImageError>;
