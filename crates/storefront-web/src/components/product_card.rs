//! Product Cards

use leptos::prelude::*;
use storefront_core::Product;

/// Card for a single product record
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = product.primary_image().to_string();
    let discount = product.discount_percent();
    let original = product.original_price.filter(|_| discount.is_some());

    view! {
        <article class="product-card">
            <div class="product-image">
                <img src=image alt=product.name.clone() />
                {discount
                    .map(|d| view! { <span class="discount-badge">{format!("-{d}%")}</span> })}
                {(!product.in_stock())
                    .then(|| view! { <span class="stock-badge">"Out of Stock"</span> })}
            </div>
            <div class="product-body">
                <span class="product-category">{product.category.clone()}</span>
                <h3 class="product-name">{product.name.clone()}</h3>
                <p class="product-description">{product.description.clone()}</p>
                <div class="product-pricing">
                    <span class="product-price">{format!("₹{}", product.price)}</span>
                    {original
                        .map(|orig| {
                            view! {
                                <span class="product-price-original">{format!("₹{orig}")}</span>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

/// Content-less stand-in matching the card shape, shown while products load
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <article class="product-card skeleton">
            <div class="skeleton-image"></div>
            <div class="product-body">
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
                <div class="skeleton-line half"></div>
            </div>
        </article>
    }
}
