//! # storefront-core
//!
//! Domain layer for the KVT storefront front-end: the product wire model,
//! the featured-products loading state, and the literal page content the
//! static sections render from.
//!
//! Everything here is platform-neutral — it compiles natively (where the
//! unit tests run) and under wasm (where `storefront-web` consumes it).

pub mod content;
pub mod error;
pub mod featured;
pub mod product;

pub use error::{CatalogError, Result};
pub use featured::{FeaturedProducts, FEATURED_PAGE_SIZE};
pub use product::{Product, ProductPage};
