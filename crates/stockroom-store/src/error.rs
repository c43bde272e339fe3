//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (stockroom-core)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (dashboard) ← Serialized for the UI                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A ledger rule rejected the operation.
    ///
    /// ## When This Occurs
    /// - Sale against an unknown product
    /// - Sale larger than the stock on hand
    /// - Quoted total does not match the price
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Product fields or a search query failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store configuration is unusable.
    ///
    /// ## When This Occurs
    /// - Low-stock threshold below 1
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
