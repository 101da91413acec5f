//! About Page
//!
//! Pure static render: company story, achievements, timeline, and values.

use leptos::prelude::*;
use storefront_core::content::{MILESTONES, STATS, VALUES};

use super::scroll_to_top;

#[component]
pub fn AboutPage() -> impl IntoView {
    scroll_to_top();

    view! {
        <div class="about">
            <section class="hero hero-centered">
                <div class="container">
                    <h1 class="hero-title">"About K. Vishwanathan Tex"</h1>
                    <p class="hero-description">
                        "Crafting premium textiles with tradition, quality, and excellence \
                         since 2011"
                    </p>
                </div>
            </section>

            <section class="story">
                <div class="container story-grid">
                    <div class="story-text">
                        <h2 class="section-title">"Our Story"</h2>
                        <p>
                            "I started my textile business in 2011 with a simple vision: to \
                             create premium quality shawls that honor tradition while meeting \
                             modern needs. My first product was the Golden Shawl, crafted with \
                             meticulous attention to detail and the finest materials."
                        </p>
                        <p>
                            "Following the success of our Golden Shawls, we expanded our \
                             collection to include Honor Shawls and Felicitation Shawls, \
                             perfect for celebrations, awards, and special ceremonies. Our \
                             Temple Shawls were later introduced to serve religious functions \
                             with the reverence they deserve."
                        </p>
                        <p>
                            "Today, our products have reached every city across Tamil Nadu, \
                             and we're proud to have built a reputation based on quality, \
                             reliability, and customer satisfaction. Thanks to excellent \
                             customer reviews and word-of-mouth recommendations, we believe \
                             our dream of expanding across India is within reach."
                        </p>
                        <p>
                            "You can contact me directly to purchase our products. Every piece \
                             we create carries our commitment to excellence and our passion \
                             for preserving the rich textile traditions of India."
                        </p>
                    </div>
                    <div class="story-visual">
                        <img
                            src="https://images.pexels.com/photos/7679720/pexels-photo-7679720.jpeg"
                            alt="K. Vishwanathan Tex Workshop"
                        />
                        <div class="founded-badge">
                            <div class="founded-year">"2011"</div>
                            <div class="founded-label">"Founded"</div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="stats">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Our Achievements"</h2>
                        <p class="section-description">
                            "Numbers that reflect our commitment to excellence"
                        </p>
                    </div>
                    <div class="stat-grid">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-icon">{stat.icon}</div>
                                        <div class="stat-figure">{stat.figure}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="timeline">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Our Journey"</h2>
                        <p class="section-description">
                            "Key milestones in our growth story"
                        </p>
                    </div>
                    <div class="timeline-track">
                        {MILESTONES
                            .iter()
                            .enumerate()
                            .map(|(i, milestone)| {
                                // Entries alternate sides of the center line.
                                let class = if i % 2 == 0 {
                                    "timeline-entry left"
                                } else {
                                    "timeline-entry right"
                                };
                                view! {
                                    <div class=class>
                                        <div class="timeline-card">
                                            <div class="timeline-year">{milestone.year}</div>
                                            <h3>{milestone.title}</h3>
                                            <p>{milestone.description}</p>
                                        </div>
                                        <div class="timeline-dot"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="values">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Our Values"</h2>
                        <p class="section-description">
                            "The principles that guide everything we do"
                        </p>
                    </div>
                    <div class="value-grid">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <div class="value">
                                        <div class="value-icon">{value.icon}</div>
                                        <h3>{value.title}</h3>
                                        <p>{value.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>"Ready to Experience Our Quality?"</h2>
                    <p>
                        "Join thousands of satisfied customers who trust KVT for their \
                         textile needs"
                    </p>
                    <div class="cta-actions">
                        <a href="/products" class="btn btn-light">"Shop Now"</a>
                        <a href="/contact" class="btn btn-outline">"Contact Us"</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
