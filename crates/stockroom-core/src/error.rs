//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations (ledger)              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Store operation failures                       │
//! │                                                                         │
//! │  dashboard errors (in app)                                             │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups that miss (`get`, `update`, `delete`) are not errors; they return
//! `None` / `false`. Only the ledger treats a missing product as a failure.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised while recording a sale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The sale references a product that does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The sale asks for more units than are on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Record Sale (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { product_id, available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Not enough stock. Only 3 available."
    /// ```
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// The caller quoted a total that does not match `quantity × price`.
    #[error("Sale total mismatch: expected {expected_cents} cents, got {provided_cents} cents")]
    TotalMismatch {
        expected_cents: i64,
        provided_cents: i64,
    },

    /// `price × quantity` does not fit in an i64 amount of cents.
    #[error("Sale total for {product_id} overflows: {quantity} × {price_cents} cents")]
    AmountOverflow {
        product_id: String,
        price_cents: i64,
        quantity: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, mirroring the dashboard's form rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: "p-1".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for p-1: available 3, requested 5"
        );

        let err = CoreError::TotalMismatch {
            expected_cents: 2000,
            provided_cents: 1999,
        };
        assert_eq!(
            err.to_string(),
            "Sale total mismatch: expected 2000 cents, got 1999 cents"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "category".to_string(),
        };
        assert_eq!(err.to_string(), "category is required");

        let err = ValidationError::MustNotBeNegative {
            field: "quantity_in_stock".to_string(),
        };
        assert_eq!(err.to_string(), "quantity_in_stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
