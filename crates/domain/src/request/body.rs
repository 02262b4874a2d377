//! Request body types

use serde_json::Value;

/// The body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// A JSON value, serialized verbatim
    Json(Value),
    /// Multipart form data
    Multipart(Vec<FormField>),
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a JSON body.
    #[must_use]
    pub const fn json(value: Value) -> Self {
        Self::Json(value)
    }

    /// Creates a multipart body.
    #[must_use]
    pub const fn multipart(fields: Vec<FormField>) -> Self {
        Self::Multipart(fields)
    }

    /// Returns whether the body is empty.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the content type the body implies, if any.
    ///
    /// Multipart bodies return `None`: the transport derives the
    /// `multipart/form-data` header together with the boundary.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            Self::None | Self::Multipart(_) => None,
        }
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file field with in-memory content.
    File {
        /// Field name.
        name: String,
        /// File name sent with the part.
        file_name: String,
        /// Raw file content.
        content: Vec<u8>,
        /// Declared content type; guessed from the file name when absent.
        content_type: Option<String>,
    },
}

impl FormField {
    /// Creates a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a file field; the content type is guessed from the file
    /// name unless set with [`with_content_type`](Self::with_content_type).
    #[must_use]
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::File {
            name: name.into(),
            file_name: file_name.into(),
            content,
            content_type: None,
        }
    }

    /// Sets an explicit content type on a file field. No-op for text fields.
    #[must_use]
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        if let Self::File { content_type, .. } = &mut self {
            *content_type = Some(value.into());
        }
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Returns the content size in bytes for file fields, `None` otherwise.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Text { .. } => None,
            Self::File { content, .. } => Some(content.len()),
        }
    }

    /// Returns the effective content type of a file field: the declared
    /// one, or a guess from the file name extension.
    #[must_use]
    pub fn effective_content_type(&self) -> Option<String> {
        match self {
            Self::Text { .. } => None,
            Self::File {
                content_type,
                file_name,
                ..
            } => content_type.clone().or_else(|| {
                mime_guess::from_path(file_name)
                    .first()
                    .map(|m| m.to_string())
            }),
        }
    }
}
