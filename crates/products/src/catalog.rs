use tracing::{debug, trace};

use storecat_core::{DomainError, DomainResult, Entity};

use crate::product::{validate_price, Product};

/// A bounded collection of all the products available at a store.
///
/// Products are kept in insertion order and their codes are unique. The
/// catalog never holds more than `max_products` entries and products are
/// never removed, so the count only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    max_products: usize,
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog holding at most `max_products` products.
    ///
    /// Fails with [`DomainError::InvalidCapacity`] when `max_products` is zero.
    pub fn new(max_products: usize) -> DomainResult<Self> {
        if max_products == 0 {
            return Err(DomainError::invalid_capacity(0));
        }
        Ok(Self {
            max_products,
            products: Vec::new(),
        })
    }

    pub fn max_products(&self) -> usize {
        self.max_products
    }

    pub fn num_products(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// True when the catalog cannot fit any more products.
    pub fn is_full(&self) -> bool {
        self.products.len() >= self.max_products
    }

    /// Add a new product.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. invalid price ([`DomainError::InvalidPrice`])
    /// 2. catalog full ([`DomainError::Overflow`])
    /// 3. code already present ([`DomainError::DuplicateCode`])
    ///
    /// A failed call leaves the catalog untouched.
    pub fn add_product(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> DomainResult<()> {
        let code = code.into();
        match self.check_insert(&code, price) {
            Ok(()) => {
                self.products.push(Product::new(code, name, price)?);
                debug!(
                    count = self.products.len(),
                    max = self.max_products,
                    "product added to catalog"
                );
                Ok(())
            }
            Err(err) => {
                debug!(code = %code, error = %err, "product rejected");
                Err(err)
            }
        }
    }

    fn check_insert(&self, code: &str, price: f64) -> DomainResult<()> {
        validate_price(price)?;
        if self.is_full() {
            return Err(DomainError::overflow(self.max_products));
        }
        if self.contains_code(code) {
            return Err(DomainError::duplicate_code(code));
        }
        Ok(())
    }

    /// Find a product by its exact (case-sensitive) code.
    pub fn find_code(&self, code: &str) -> DomainResult<&Product> {
        let found = self.products.iter().find(|p| p.id() == code);
        trace!(code, hit = found.is_some(), "catalog lookup");
        found.ok_or_else(|| DomainError::code_not_found(code))
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.products.iter().any(|p| p.id() == code)
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl TryFrom<i64> for Catalog {
    type Error = DomainError;

    fn try_from(max_products: i64) -> Result<Self, Self::Error> {
        if max_products <= 0 {
            return Err(DomainError::invalid_capacity(max_products));
        }
        let max_products = usize::try_from(max_products)
            .map_err(|_| DomainError::invalid_capacity(max_products))?;
        Self::new(max_products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
