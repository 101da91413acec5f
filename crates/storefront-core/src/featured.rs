//! Featured Products State
//!
//! State behind the landing page's featured strip. The page fires one listing
//! request when it mounts; this type tracks the in-flight window and settles
//! exactly once - success populates the sequence, failure leaves it empty.
//! Either way the loading flag clears so the skeleton grid gives way to the
//! real (possibly empty) product grid.

use crate::product::Product;

/// Fixed page size requested from the listing endpoint, and the number of
/// skeleton cards shown while the request is in flight.
pub const FEATURED_PAGE_SIZE: usize = 8;

/// Loading state for the featured products strip
#[derive(Clone, Debug)]
pub struct FeaturedProducts {
    products: Vec<Product>,
    loading: bool,
}

impl Default for FeaturedProducts {
    fn default() -> Self {
        Self::new()
    }
}

impl FeaturedProducts {
    /// Fresh state: loading, nothing fetched yet
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
        }
    }

    /// True until the listing request settles
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetched products, in response order (empty while loading or on failure)
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Successful settlement: store the fetched page and clear the flag
    pub fn resolve(&mut self, products: Vec<Product>) {
        if !self.loading {
            tracing::warn!("featured products already settled, ignoring late resolve");
            return;
        }
        self.products = products;
        self.loading = false;
    }

    /// Failed settlement: clear the flag, keep the sequence empty
    pub fn fail(&mut self) {
        if !self.loading {
            tracing::warn!("featured products already settled, ignoring late failure");
            return;
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Shawl {id}"),
            description: String::new(),
            category: "Golden Shawl".into(),
            price: dec!(999),
            original_price: None,
            images: vec![],
            stock: 1,
            created_at: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = FeaturedProducts::new();
        assert!(state.is_loading());
        assert!(state.products().is_empty());
    }

    #[test]
    fn test_resolve_keeps_response_order() {
        let mut state = FeaturedProducts::new();
        let ids: Vec<String> = (1..=FEATURED_PAGE_SIZE).map(|n| format!("p{n}")).collect();
        state.resolve(ids.iter().map(|id| product(id)).collect());

        assert!(!state.is_loading());
        assert_eq!(state.products().len(), FEATURED_PAGE_SIZE);
        let got: Vec<&str> = state.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(got, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_failure_settles_empty() {
        let mut state = FeaturedProducts::new();
        state.fail();
        assert!(!state.is_loading());
        assert!(state.products().is_empty());
    }

    #[test]
    fn test_settles_at_most_once() {
        let mut state = FeaturedProducts::new();
        state.resolve(vec![product("p1")]);

        // A second settlement of either kind must not disturb the first.
        state.fail();
        state.resolve(vec![product("p2"), product("p3")]);

        assert!(!state.is_loading());
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].id, "p1");
    }

    #[test]
    fn test_failure_then_late_success_is_ignored() {
        let mut state = FeaturedProducts::new();
        state.fail();
        state.resolve(vec![product("p1")]);
        assert!(state.products().is_empty());
    }
}
