use thiserror::Error;

/// Result type alias using LocationError
pub type Result<T> = std::result::Result<T, LocationError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,

    // Strategy construction
    Configuration,
    TypeMismatch,
    /// A location derived from table input broke a structural rule
    InvariantViolation,

    // Path translation
    InvalidPrefix,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::InvalidPrefix => "ERR_INVALID_PREFIX",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    impl_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            impl_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending path or location
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add the implementation identifier being constructed
    pub fn with_impl_name(mut self, impl_name: impl Into<String>) -> Self {
        self.impl_name = Some(impl_name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn impl_name(&self) -> Option<&str> {
        self.impl_name.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(impl_name) = &self.impl_name {
            write!(f, " (impl: {})", impl_name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for location strategy construction and path translation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// An explicit implementation identifier has no usable constructor
    #[error(
        "Unable to find a constructor for implementation {impl_name}: {reason}. \
         Register it with either a no-arg constructor or a two-arg constructor \
         taking the table location and its properties"
    )]
    Configuration { impl_name: String, reason: String },

    /// A constructed implementation is not a location strategy
    #[error("Provided implementation {impl_name} does not implement LocationStrategy")]
    TypeMismatch { impl_name: String },

    /// Relative-path mode is on but the path is outside the configured prefix
    #[error("Provided value for property prefix as {prefix} is not valid for path {path}")]
    InvalidPrefix { prefix: String, path: String },

    /// A value derived from the table location broke a structural rule
    #[error("Invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// Caller supplied unusable input
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<LocationError> for ExError {
    fn from(err: LocationError) -> Self {
        let message = err.to_string();
        match err {
            LocationError::Configuration { impl_name, .. } => {
                ExError::new(ExErrorKind::Configuration)
                    .with_op("resolve")
                    .with_impl_name(impl_name)
                    .with_message(message)
            }
            LocationError::TypeMismatch { impl_name } => ExError::new(ExErrorKind::TypeMismatch)
                .with_op("resolve")
                .with_impl_name(impl_name)
                .with_message(message),
            LocationError::InvalidPrefix { path, .. } => ExError::new(ExErrorKind::InvalidPrefix)
                .with_op("relative_path")
                .with_path(path)
                .with_message(message),
            LocationError::InvariantViolation { .. } => {
                ExError::new(ExErrorKind::InvariantViolation).with_message(message)
            }
            LocationError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}
