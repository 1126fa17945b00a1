//! Wire models exchanged with the system under test
//!
//! Plain serde records; the remote system assigns identity, the framework
//! only round-trips field values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product as sent to and echoed by the products API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Credentials for the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
}

/// A user record as returned by the users API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Aggregated sales figures from the analytics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub sales_by_category: HashMap<String, u32>,
    #[serde(default)]
    pub merged_products: Vec<MergedProduct>,
}

/// A product ranked by units sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
}

/// A product enriched with its lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_roundtrip() {
        let product = Product {
            id: 42,
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 9.99,
        };

        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(product, parsed);
    }

    #[test]
    fn product_id_defaults_when_absent() {
        let json = r#"{"name": "Widget", "category": "Tools", "price": 9.99}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn login_roundtrip() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "password123".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"username\":\"admin\""));

        let response: LoginResponse =
            serde_json::from_str(r#"{"message": "Login successful", "role": "admin"}"#).unwrap();
        assert_eq!(response.role, "admin");
    }

    #[test]
    fn analytics_summary_uses_camel_case() {
        let json = r#"{
            "totalRevenue": 1234.56,
            "topProducts": [
                {"id": 1, "name": "Laptop", "category": "Laptops", "quantity": 12}
            ],
            "salesByCategory": {"Laptops": 12, "Phones": 3},
            "mergedProducts": [
                {"id": 1, "name": "Laptop", "category": "Laptops", "price": 999.99, "status": "active"}
            ]
        }"#;

        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.total_revenue, 1234.56);
        assert_eq!(summary.top_products.len(), 1);
        assert_eq!(summary.top_products[0].quantity, 12);
        assert_eq!(summary.sales_by_category.get("Phones"), Some(&3));
        assert_eq!(summary.merged_products[0].status, "active");
    }

    #[test]
    fn analytics_summary_optional_sections_default() {
        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"totalRevenue": 0.0}"#).unwrap();

        assert!(summary.top_products.is_empty());
        assert!(summary.sales_by_category.is_empty());
        assert!(summary.merged_products.is_empty());
    }
}
