//! UI Components

mod ad_slider;
mod layout;
mod product_card;

pub use ad_slider::AdSlider;
pub use layout::{SiteFooter, SiteNav};
pub use product_card::{ProductCard, SkeletonCard};
