//! Commerce error types.

use carryon_storage::StorageError;
use thiserror::Error;

use crate::validation::FieldError;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Checkout requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Sort key not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSortKey(String),

    /// Product dataset could not be read or parsed.
    #[error("Failed to load product data from {source_name}: {reason}")]
    Dataset { source_name: String, reason: String },

    /// Persistent store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// One or more form fields failed validation.
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
