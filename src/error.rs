//! # Error Types
//!
//! This module defines error types used throughout the vellum library.
//!
//! Per-request failures ([`VellumError::InvalidLineItem`],
//! [`VellumError::InvalidCharge`], [`VellumError::AmountOutOfRange`]) come
//! back from `render()`. Registry
//! failures ([`VellumError::Registry`], [`VellumError::MissingRequiredField`])
//! are raised once, when an [`Engine`](crate::Engine) is built. An unknown
//! template id is never an error: the engine falls back to the generic
//! template and logs a warning.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for vellum operations
#[derive(Debug, Error)]
pub enum VellumError {
    /// A line item failed validation (negative quantity/rate, bad override)
    #[error("Invalid line item '{id}': {reason}")]
    InvalidLineItem { id: String, reason: String },

    /// A document-level charge (tax rate, shipping, service charge) is negative
    #[error("Invalid charge: {field} must not be negative (got {value})")]
    InvalidCharge { field: &'static str, value: Decimal },

    /// A computed total does not fit in a decimal
    #[error("Amount out of range: {figure} is too large to compute")]
    AmountOutOfRange { figure: &'static str },

    /// A field has no explicit value, no template default and no engine default
    #[error("Template '{template}' has no value for required field '{field}'")]
    MissingRequiredField { template: String, field: &'static str },

    /// Structural problem in the template registry
    #[error("Template registry error: {0}")]
    Registry(String),

    /// Transport-level errors (binding the HTTP listener, serving)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VellumError {
    /// Build an [`VellumError::InvalidLineItem`] for the given item id.
    pub fn invalid_item(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLineItem {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the request data rather than the
    /// engine's own configuration or environment.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLineItem { .. }
                | Self::InvalidCharge { .. }
                | Self::AmountOutOfRange { .. }
                | Self::Json(_)
        )
    }
}
