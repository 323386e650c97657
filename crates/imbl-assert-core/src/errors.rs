//! Structured error types shared across the assertion crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AssertError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (sizes, assertion names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type raised by assertions.
///
/// `Usage` and `Mismatch` display as their bare message so that the text a
/// test sees on failure is exactly the rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AssertError {
    /// The assertion was invoked with invalid arguments (e.g. missing expected entries).
    #[error("{}", .0.message)]
    Usage(ErrorInfo),
    /// The actual value did not satisfy the assertion.
    #[error("{}", .0.message)]
    Mismatch(ErrorInfo),
    /// Report serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl AssertError {
    /// Builds a usage error with the provided code and message.
    pub fn usage(code: &str, message: impl Into<String>) -> Self {
        AssertError::Usage(ErrorInfo::new(code, message))
    }

    /// Builds a mismatch error with the provided code and message.
    pub fn mismatch(code: &str, message: impl Into<String>) -> Self {
        AssertError::Mismatch(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AssertError::Usage(info) | AssertError::Mismatch(info) | AssertError::Serde(info) => {
                info
            }
        }
    }

    /// Returns the human readable message carried by the payload.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Whether the error stems from a failed comparison rather than misuse.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, AssertError::Mismatch(_))
    }

    /// Replaces the message while keeping code, context and hint intact.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let rewrite = |mut info: ErrorInfo| {
            info.message = message.into();
            info
        };
        match self {
            AssertError::Usage(info) => AssertError::Usage(rewrite(info)),
            AssertError::Mismatch(info) => AssertError::Mismatch(rewrite(info)),
            AssertError::Serde(info) => AssertError::Serde(rewrite(info)),
        }
    }

    /// Attaches a context entry to the payload.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            AssertError::Usage(info) => AssertError::Usage(info.with_context(key, value)),
            AssertError::Mismatch(info) => AssertError::Mismatch(info.with_context(key, value)),
            AssertError::Serde(info) => AssertError::Serde(info.with_context(key, value)),
        }
    }
}
