use serde::Serialize;

use storecat_core::{DomainError, DomainResult, Entity};

/// A kind of product sold at a store, such as apples or cereal.
///
/// `code` is meant to hold a UPC (bar code) or PLU code, but any string is
/// accepted. `price` is in currency units and is always positive. All fields
/// are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    code: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let price = validate_price(price)?;
        Ok(Self {
            code: code.into(),
            name: name.into(),
            price,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.code
    }
}

/// Accepts only strictly positive prices.
pub(crate) fn validate_price(price: f64) -> DomainResult<f64> {
    // `!(x > 0.0)` also catches NaN.
    if !(price > 0.0) {
        return Err(DomainError::invalid_price(price));
    }
    Ok(price)
}
