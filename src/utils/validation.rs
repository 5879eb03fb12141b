use crate::domain::model::Product;
use crate::utils::error::{CartError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

/// A product must survive a snapshot round trip: a non-empty id and a
/// price JSON can represent.
pub fn validate_product(product: &Product) -> Result<()> {
    if product.id.trim().is_empty() {
        return Err(CartError::InvalidProductError {
            id: product.id.clone(),
            reason: "Product id cannot be empty".to_string(),
        });
    }

    if !product.price.is_finite() {
        return Err(CartError::InvalidProductError {
            id: product.id.clone(),
            reason: format!("Price must be a finite number, got {}", product.price),
        });
    }

    Ok(())
}
