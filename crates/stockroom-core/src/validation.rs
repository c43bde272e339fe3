//! # Validation Module
//!
//! Input validation for product forms and sales.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard forms (frontend)                                   │
//! │  ├── Required fields, number inputs                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands (Rust)                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger (under the write lock)                                │
//! │  ├── Product must exist                                                │
//! │  └── Stock must cover the sale                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_product_name, validate_sale_quantity};
//!
//! assert!(validate_product_name("Desk Lamp").is_ok());
//! assert!(validate_sale_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{NewProduct, ProductPatch};
use crate::{MAX_PRICE_CENTS, MAX_SALE_QUANTITY, MAX_STOCK_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Office Chair").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required_text("name", name, MAX_NAME_LEN)
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
pub fn validate_category(category: &str) -> ValidationResult<()> {
    required_text("category", category, MAX_CATEGORY_LEN)
}

/// Validates a product description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters, surrounding whitespace included
///
/// The query is matched as typed, so it is not trimmed here.
pub fn validate_search_query(query: &str) -> ValidationResult<()> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be positive (> 0); the product form rejects free items
/// - Must not exceed MAX_PRICE_CENTS ($100 000 000.00)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4999).is_ok());
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity_in_stock".to_string(),
        });
    }

    if quantity > MAX_STOCK_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity_in_stock".to_string(),
            min: 0,
            max: MAX_STOCK_QUANTITY,
        });
    }

    Ok(())
}

/// Validates the quantity of a single sale.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_SALE_QUANTITY (9 999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Transactions: Record Sale                                              │
/// │                                                                         │
/// │  User enters quantity: 2                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_sale_quantity(2) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── qty <= 0?    → Error: "quantity_sold must be positive"       │
/// │       │                                                                 │
/// │       ├── qty > 9999?  → Error: out of range                           │
/// │       │                                                                 │
/// │       └── OK → Ledger checks product and stock                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity_sold".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity_sold".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a product creation request.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_description(&product.description)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.quantity_in_stock)?;
    Ok(())
}

/// Validates the fields present in a patch. Absent fields are skipped.
pub fn validate_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description)?;
    }
    if let Some(price_cents) = patch.price_cents {
        validate_price_cents(price_cents)?;
    }
    if let Some(quantity) = patch.quantity_in_stock {
        validate_stock(quantity)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
