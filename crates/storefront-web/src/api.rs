//! API Client

use storefront_core::{CatalogError, Product, ProductPage, Result};

/// Fetch one page of featured products from the listing endpoint
pub async fn fetch_featured_products(limit: usize) -> Result<Vec<Product>> {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("/products?limit={limit}"))
        .send()
        .await
        .map_err(|e| CatalogError::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status().as_u16()));
    }

    let page: ProductPage = response
        .json()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))?;

    Ok(page.products)
}
