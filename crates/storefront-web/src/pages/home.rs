//! Home Page
//!
//! Static hero/category/feature sections plus the featured products strip.
//! The strip issues one listing request when the page mounts and swaps its
//! skeleton grid for product cards once the request settles.

use leptos::prelude::*;
use storefront_core::content::{CATEGORIES, FEATURES};
use storefront_core::{FEATURED_PAGE_SIZE, FeaturedProducts};

use super::scroll_to_top;
use crate::api;
use crate::components::{AdSlider, ProductCard, SkeletonCard};

#[component]
pub fn HomePage() -> impl IntoView {
    scroll_to_top();

    let (featured, set_featured) = signal(FeaturedProducts::new());

    // The component body runs once per mount, so exactly one request goes
    // out; re-renders never reach this point again.
    leptos::task::spawn_local(async move {
        match api::fetch_featured_products(FEATURED_PAGE_SIZE).await {
            Ok(products) => {
                // try_update: the page may have unmounted while the request
                // was in flight, in which case the late result is dropped.
                let _ = set_featured.try_update(|f| f.resolve(products));
            }
            Err(e) => {
                leptos::logging::error!("Error fetching products: {e}");
                let _ = set_featured.try_update(|f| f.fail());
            }
        }
    });

    view! {
        <div class="home">
            <AdSlider />

            <section class="hero">
                <div class="container hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Premium Textile"
                            <span class="hero-title-accent">"Collections"</span>
                        </h1>
                        <p class="hero-description">
                            "Discover our exquisite range of shawls and textiles, crafted \
                             with tradition and excellence since 2011."
                        </p>
                        <div class="hero-actions">
                            <a href="/products" class="btn btn-primary">"Shop Now →"</a>
                            <a href="/about" class="btn btn-secondary">"Learn More"</a>
                        </div>
                    </div>
                    <div class="hero-image">
                        <img
                            src="https://images.pexels.com/photos/7679720/pexels-photo-7679720.jpeg"
                            alt="Premium Textiles"
                        />
                    </div>
                </div>
            </section>

            <section class="categories">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Our Categories"</h2>
                        <p class="section-description">
                            "Explore our diverse collection of premium shawls designed for \
                             every occasion"
                        </p>
                    </div>
                    <div class="category-grid">
                        {CATEGORIES
                            .iter()
                            .map(|cat| {
                                view! {
                                    <a href=cat.link() class="category-card">
                                        <img src=cat.image alt=cat.name />
                                        <div class="category-body">
                                            <h3>{cat.name}</h3>
                                            <p>{cat.description}</p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="featured">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Featured Products"</h2>
                        <p class="section-description">
                            "Discover our most popular and trending products"
                        </p>
                    </div>

                    <Show
                        when=move || featured.with(FeaturedProducts::is_loading)
                        fallback=move || {
                            view! {
                                <div class="product-grid">
                                    <For
                                        each=move || featured.with(|f| f.products().to_vec())
                                        key=|product| product.id.clone()
                                        children=move |product| {
                                            view! { <ProductCard product=product /> }
                                        }
                                    />
                                </div>
                            }
                        }
                    >
                        <div class="product-grid">
                            {(0..FEATURED_PAGE_SIZE)
                                .map(|_| view! { <SkeletonCard /> })
                                .collect_view()}
                        </div>
                    </Show>

                    <div class="section-footer">
                        <a href="/products" class="btn btn-primary">"View All Products →"</a>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Why Choose KVT?"</h2>
                        <p class="section-description">
                            "Experience the difference with our commitment to quality and \
                             service"
                        </p>
                    </div>
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="feature">
                                        <div class="feature-icon">{feature.icon}</div>
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>"Ready to Experience Premium Quality?"</h2>
                    <p>
                        "Join thousands of satisfied customers who trust KVT for their \
                         textile needs"
                    </p>
                    <a href="/products" class="btn btn-light">"Start Shopping →"</a>
                </div>
            </section>
        </div>
    }
}
