//! Site Chrome

use leptos::prelude::*;

/// Top navigation bar, shown on every page
#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"KVT"</span>
                    <span class="nav-subtitle">"K. Vishwanathan Tex"</span>
                </a>
                <div class="nav-links">
                    <a href="/" class="nav-link">"Home"</a>
                    <a href="/products" class="nav-link">"Products"</a>
                    <a href="/about" class="nav-link">"About"</a>
                    <a href="/contact" class="nav-link">"Contact"</a>
                </div>
            </div>
        </nav>
    }
}

/// Site footer, shown on every page
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"K. Vishwanathan Tex"</span>
                    <p class="footer-tagline">
                        "Premium shawls and textiles, crafted with tradition since 2011."
                    </p>
                </div>
                <div class="footer-links">
                    <a href="/products" class="footer-link">"Products"</a>
                    <a href="/about" class="footer-link">"About Us"</a>
                    <a href="/contact" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">
                    "© 2024 K. Vishwanathan Tex. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
