//! Random test data for request payloads

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{Product, User};

const CATEGORIES: &[&str] = &[
    "Laptops",
    "Phones",
    "Accessories",
    "Tablets",
    "Gaming",
    "Software",
];

const ADJECTIVES: &[&str] = &[
    "Rustic", "Sleek", "Compact", "Ergonomic", "Refined", "Durable", "Modern",
];

const MATERIALS: &[&str] = &["Steel", "Wooden", "Granite", "Cotton", "Carbon", "Aluminum"];

const NOUNS: &[&str] = &[
    "Keyboard", "Mouse", "Monitor", "Headset", "Charger", "Dock", "Stand",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Sam", "Morgan", "Casey", "Riley", "Taylor", "Quinn",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Chen", "Patel", "Novak", "Okafor", "Kim", "Ivanov",
];

// Generated ids stay in a range the seeded application data never uses.
const ID_MIN: u32 = 10_000;
const ID_MAX: u32 = 99_999;

/// Random payload generator, one per test.
pub struct TestData {
    rng: SmallRng,
}

impl Default for TestData {
    fn default() -> Self {
        Self::new()
    }
}

impl TestData {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible tests
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random id in the test range
    pub fn id(&mut self) -> u32 {
        self.rng.gen_range(ID_MIN..=ID_MAX)
    }

    /// Random product name, e.g. "Sleek Steel Keyboard"
    pub fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(ADJECTIVES),
            self.pick(MATERIALS),
            self.pick(NOUNS)
        )
    }

    /// Random category from the fixed catalogue
    pub fn category(&mut self) -> String {
        self.pick(CATEGORIES).to_string()
    }

    /// Random price within `[min, max]`, rounded to cents
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let raw = self.rng.gen_range(min..=max);
        (raw * 100.0).round() / 100.0
    }

    /// Fully random product payload
    pub fn product(&mut self) -> Product {
        Product {
            id: self.id(),
            name: self.product_name(),
            category: self.category(),
            price: self.price(10.0, 2000.0),
        }
    }

    /// Random person name
    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    /// Random email address
    pub fn email(&mut self) -> String {
        format!(
            "{}.{}{}@example.com",
            self.pick(FIRST_NAMES).to_ascii_lowercase(),
            self.pick(LAST_NAMES).to_ascii_lowercase(),
            self.rng.gen_range(1..9999_u32)
        )
    }

    /// Fully random user payload
    pub fn user(&mut self) -> User {
        User {
            id: self.id(),
            name: self.full_name(),
            email: self.email(),
        }
    }

    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        table[self.rng.gen_range(0..table.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_stays_in_test_range() {
        let mut data = TestData::seeded(7);
        for _ in 0..100 {
            let id = data.id();
            assert!((ID_MIN..=ID_MAX).contains(&id));
        }
    }

    #[test]
    fn price_respects_bounds_and_cents() {
        let mut data = TestData::seeded(7);
        for _ in 0..100 {
            let price = data.price(10.0, 500.0);
            assert!((10.0..=500.0).contains(&price));
            let cents = price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn category_comes_from_catalogue() {
        let mut data = TestData::seeded(7);
        for _ in 0..20 {
            let category = data.category();
            assert!(CATEGORIES.contains(&category.as_str()));
        }
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let mut a = TestData::seeded(42);
        let mut b = TestData::seeded(42);
        assert_eq!(a.product(), b.product());
        assert_eq!(a.user(), b.user());
    }

    #[test]
    fn product_fields_are_populated() {
        let product = TestData::seeded(1).product();
        assert!(!product.name.is_empty());
        assert!(!product.category.is_empty());
        assert!(product.price >= 10.0);
    }

    #[test]
    fn email_is_well_formed() {
        let email = TestData::seeded(1).email();
        assert!(email.ends_with("@example.com"));
        assert!(email.contains('.'));
    }
}
