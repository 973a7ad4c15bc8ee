//! Error types for loading and serving the datasets.
//!
//! Every failure carries an [`ErrorContext`] naming the operation and the input
//! involved, so a startup abort points straight at the offending file or column.

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Structured context for store errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "read_csv", "join_spatial_units")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "vegetation", "visitors")
    pub entity: Option<String>,
    /// File path, column name or key
    pub entity_id: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An input file could not be opened or read.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// An input file was read but its contents could not be decoded.
    #[error("Parse error: {message} {context}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    /// A required column is missing or has an unusable type.
    #[error("Schema error: {message} {context}")]
    Schema {
        message: String,
        context: ErrorContext,
    },

    /// Joining the spatial-unit tables failed or produced nothing.
    #[error("Join error: {message} {context}")]
    Join {
        message: String,
        context: ErrorContext,
    },

    /// Configuration file missing, unreadable or invalid.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// A figure could not be encoded.
    #[error("Render error: {message} {context}")]
    Render {
        message: String,
        context: ErrorContext,
    },
}

impl StoreError {
    pub fn io_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context,
        }
    }

    pub fn parse_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Parse {
            message: message.into(),
            context,
        }
    }

    pub fn schema_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Schema {
            message: message.into(),
            context,
        }
    }

    pub fn join_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Join {
            message: message.into(),
            context,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    pub fn render_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Render {
            message: message.into(),
            context,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Io { context, .. }
            | Self::Parse { context, .. }
            | Self::Schema { context, .. }
            | Self::Join { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::Render { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new("read_csv")
            .with_entity("vegetation")
            .with_entity_id("vcf_shrid.csv")
            .with_details("missing column");
        assert_eq!(
            ctx.to_string(),
            "[operation=read_csv, entity=vegetation, id=vcf_shrid.csv, details=missing column]"
        );
    }

    #[test]
    fn test_empty_context_display() {
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }

    #[test]
    fn test_store_error_message_includes_context() {
        let err = StoreError::schema_with_context(
            "column 'vcf_mean' not found",
            ErrorContext::new("read_csv").with_entity("vegetation"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Schema error: column 'vcf_mean' not found"));
        assert!(msg.contains("entity=vegetation"));
        assert_eq!(err.context().operation.as_deref(), Some("read_csv"));
    }

    #[test]
    fn test_configuration_error_without_context() {
        let err = StoreError::configuration("no explorer.toml found");
        assert!(matches!(err, StoreError::ConfigurationError { .. }));
        assert!(err.to_string().contains("no explorer.toml found"));
    }
}
