//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Command Function → Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ├── ValidationError ─────────────────► VALIDATION_ERROR         │
//! │         ├── CoreError::ProductNotFound ──────► NOT_FOUND                │
//! │         ├── CoreError::InsufficientStock ────► INSUFFICIENT_STOCK       │
//! │         ├── CoreError::TotalMismatch ────────► BUSINESS_LOGIC           │
//! │         ├── CoreError::AmountOverflow ───────► BUSINESS_LOGIC           │
//! │         └── StoreError::InvalidConfig ───────► INTERNAL                 │
//! │                                                                         │
//! │  UI receives:                                                           │
//! │    { "code": "INSUFFICIENT_STOCK",                                      │
//! │      "message": "Not enough stock for Desk Lamp: 3 available, ..." }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockroom_core::{CoreError, ValidationError};
use stockroom_store::StoreError;

use crate::config::ConfigError;

/// API error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 2f1c..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await recordTransaction({ productId, quantitySold });
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_STOCK':
///       toast.error(e.message);
///       break;
///     case 'VALIDATION_ERROR':
///       showFieldError(e.message);
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Sale larger than the stock on hand
    InsufficientStock,

    /// Business rule violation (422)
    BusinessLogic,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => ApiError::from(e),
            StoreError::Validation(e) => ApiError::from(e),
            StoreError::InvalidConfig(e) => {
                tracing::error!("Invalid store configuration: {}", e);
                ApiError::internal("Store is misconfigured")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::InsufficientStock {
                product_id,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Not enough stock for {}: {} available, {} requested",
                    product_id, available, requested
                ),
            ),
            CoreError::TotalMismatch {
                expected_cents,
                provided_cents,
            } => ApiError::new(
                ErrorCode::BusinessLogic,
                format!(
                    "Sale total {} does not match price total {}",
                    stockroom_core::Money::from_cents(provided_cents),
                    stockroom_core::Money::from_cents(expected_cents)
                ),
            ),
            CoreError::AmountOverflow {
                product_id,
                price_cents,
                quantity,
            } => {
                tracing::warn!(%product_id, price_cents, quantity, "Sale total overflows");
                ApiError::new(
                    ErrorCode::BusinessLogic,
                    format!("Sale total for {} is too large to record", product_id),
                )
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
