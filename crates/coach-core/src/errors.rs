// ABOUTME: Error type and error codes shared by every telemetry crate
// ABOUTME: AppError carries a code, a message, user/record context and an optional source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Errors
//!
//! Analyzers degrade to `None` or empty output rather than failing, so an
//! [`AppError`] is raised in three places only:
//!
//! - a payload that cannot become a canonical record (missing id or date,
//!   unparseable timestamp, non-object JSON)
//! - thresholds or environment values that fail validation
//! - storage and zone-profile collaborators
//!
//! [`ErrorCode::is_per_item`] tells batch callers whether a failure belongs
//! to one payload or to the whole job.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Payload (1000-1999)
    /// Payload is structurally unusable (not an object, empty profile)
    InvalidInput = 1000,
    /// Payload lacks the identifier or date every record needs
    MissingRequiredField = 1001,
    /// Field present but its value could not be parsed
    InvalidFormat = 1002,

    // Lookup (2000-2999)
    /// A collaborator holds nothing under the requested key
    ResourceNotFound = 2000,

    // Configuration (3000-3999)
    /// Environment value could not be read or parsed
    ConfigError = 3000,
    /// Threshold parsed but failed validation
    ConfigInvalid = 3001,

    // Collaborators (4000-4999)
    /// Stream or record storage failed
    StorageError = 4000,
    /// JSON encoding or decoding failed
    SerializationError = 4001,
}

impl ErrorCode {
    /// Short description used as the display prefix
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Unusable payload",
            Self::MissingRequiredField => "Payload field missing",
            Self::InvalidFormat => "Unparseable payload field",
            Self::ResourceNotFound => "Not found",
            Self::ConfigError => "Configuration unreadable",
            Self::ConfigInvalid => "Configuration rejected",
            Self::StorageError => "Storage failure",
            Self::SerializationError => "JSON failure",
        }
    }

    /// Whether a batch job may skip the failing item and continue
    #[must_use]
    pub const fn is_per_item(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ResourceNotFound
        )
    }
}

/// Where an error happened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    /// Athlete the records belong to
    pub user_id: Option<Uuid>,
    /// Provider record or workout id
    pub resource_id: Option<String>,
}

/// Error raised at normalization, configuration and collaborator boundaries
#[derive(Debug, Error)]
pub struct AppError {
    /// Category
    pub code: ErrorCode,
    /// Detail message
    pub message: String,
    /// User and record the failure concerns
    pub context: ErrorContext,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Error with no context attached
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Tag with the athlete
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.context.user_id = Some(user_id);
        self
    }

    /// Tag with the provider record id
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Keep the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Structurally unusable input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// None of a field's aliases were present
    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorCode::MissingRequiredField, format!("no value for {field}"))
    }

    /// Field present but unparseable
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Collaborator has nothing under this key
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Environment value unreadable
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage collaborator failed
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(resource_id) = &self.context.resource_id {
            write!(f, " (record {resource_id})")?;
        }
        Ok(())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_and_display() {
        let user = Uuid::new_v4();
        let error = AppError::missing_field("start_date")
            .with_user_id(user)
            .with_resource_id("i123");

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.user_id, Some(user));
        assert_eq!(
            error.to_string(),
            "Payload field missing: no value for start_date (record i123)"
        );
    }

    #[test]
    fn test_per_item_codes() {
        assert!(ErrorCode::InvalidFormat.is_per_item());
        assert!(ErrorCode::ResourceNotFound.is_per_item());
        assert!(!ErrorCode::StorageError.is_per_item());
        assert!(!ErrorCode::ConfigInvalid.is_per_item());
    }

    #[test]
    fn test_json_error_keeps_source() {
        let error: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_code_wire_name() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredField).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FIELD\"");
    }
}
