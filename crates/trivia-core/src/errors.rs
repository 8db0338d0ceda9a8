use trivia_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using TriviaError
pub type Result<T> = std::result::Result<T, TriviaError>;

/// Result type alias for boundaries that speak the structured error facility
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code. The HTTP layer maps kinds onto
/// the three response classes (404, 422, 500); lower layers never pick a
/// status code themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Client input
    InvalidInput,
    MissingField,

    // Resolution
    NotFound,
    /// A write (or a search) could not be carried out; surfaced as 422
    Unprocessable,

    // Integration/IO
    Persistence,
    Serialization,
    Io,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Unprocessable => "ERR_UNPROCESSABLE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, entity id,
/// correlation ids). Engine operations wrap lower-level errors with
/// `with_source` when they translate them into a response class.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Walk the source chain and return the innermost error
    pub fn root_cause(&self) -> &ExError {
        let mut current = self;
        while let Some(next) = current.source_error() {
            current = next;
        }
        current
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriviaError {
    /// Question id does not exist
    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: i64 },

    /// A required input field was absent or null
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Category referenced by a new question does not exist
    #[error("Category does not exist: {category}")]
    InvalidCategory { category: String },

    /// No category rows exist at all
    #[error("No categories available")]
    NoCategories,

    /// Requested page lies outside the result set
    #[error("Page {page} is out of range")]
    PageOutOfRange { page: i64 },

    /// Quiz scope resolved to zero questions
    #[error("No questions in quiz scope (category {category_id})")]
    EmptyCandidatePool { category_id: i64 },
}

impl From<TriviaError> for ExError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::QuestionNotFound { question_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(question_id.to_string())
                .with_message("Question not found"),

            TriviaError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("Missing required field: {}", field)),

            TriviaError::InvalidCategory { category } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(category)
                .with_message("Category does not exist"),

            TriviaError::NoCategories => {
                ExError::new(ExErrorKind::NotFound).with_message("No categories available")
            }

            TriviaError::PageOutOfRange { page } => ExError::new(ExErrorKind::NotFound)
                .with_message(format!("Page {} is out of range", page)),

            TriviaError::EmptyCandidatePool { category_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(category_id.to_string())
                .with_message("No questions in quiz scope"),
        }
    }
}
