//! Product resource client

use crosscheck_core::{ApiSettings, Product};

use crate::client::HttpClient;
use crate::error::ApiResult;

const BASE_PATH: &str = "/api/products";

/// Header marking traffic the backend should treat as test data
pub const TEST_MARKER_HEADER: &str = "X-Test-Request";

/// CRUD operations on the products resource
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: HttpClient,
}

impl ProductClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Ok(Self::new(HttpClient::new(settings)?))
    }

    /// Create a product; the response echoes the stored record
    ///
    /// # Errors
    ///
    /// Returns the classified failure
    pub fn create(&self, product: &Product) -> ApiResult<Product> {
        self.http.post(product, BASE_PATH)
    }

    /// Create a product flagged with the test-marker header
    ///
    /// # Errors
    ///
    /// Returns the classified failure
    pub fn create_marked(&self, product: &Product) -> ApiResult<Product> {
        self.http
            .post_with_headers(product, BASE_PATH, &[(TEST_MARKER_HEADER, "true")])
    }

    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id
    pub fn get(&self, id: u32) -> ApiResult<Product> {
        self.http.get(&format!("{BASE_PATH}/{id}"))
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn list(&self) -> ApiResult<Vec<Product>> {
        self.http.get(BASE_PATH)
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn list_by_category(&self, category: &str) -> ApiResult<Vec<Product>> {
        self.http.get(&format!("{BASE_PATH}?category={category}"))
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn update(&self, id: u32, product: &Product) -> ApiResult<Product> {
        self.http.put(product, &format!("{BASE_PATH}/{id}"))
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn delete(&self, id: u32) -> ApiResult<()> {
        self.http.delete(&format!("{BASE_PATH}/{id}"))
    }
}
