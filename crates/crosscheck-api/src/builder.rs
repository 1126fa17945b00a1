//! Fluent construction of request payloads

use crosscheck_core::{Product, TestData};

/// Builds product payloads, mixing fixed and generated fields.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    id: u32,
    name: String,
    category: String,
    price: f64,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Sample Product".to_string(),
            category: "Laptops".to_string(),
            price: 999.99,
        }
    }
}

impl ProductBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Randomize every field
    #[must_use]
    pub fn fake(mut self) -> Self {
        let product = TestData::new().product();
        self.id = product.id;
        self.name = product.name;
        self.category = product.category;
        self.price = product.price;
        self
    }

    #[must_use]
    pub fn fake_id(mut self) -> Self {
        self.id = TestData::new().id();
        self
    }

    #[must_use]
    pub fn fake_name(mut self) -> Self {
        self.name = TestData::new().product_name();
        self
    }

    #[must_use]
    pub fn fake_category(mut self) -> Self {
        self.category = TestData::new().category();
        self
    }

    #[must_use]
    pub fn fake_price(mut self, min: f64, max: f64) -> Self {
        self.price = TestData::new().price(min, max);
        self
    }

    #[must_use]
    pub fn build(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}
