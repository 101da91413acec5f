//! Promotional Slider

use std::time::Duration;

use leptos::prelude::*;
use storefront_core::content::AD_SLIDES;

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Auto-advancing banner carousel at the top of the landing page
#[component]
pub fn AdSlider() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    let advance = move || set_active.update(|i| *i = (*i + 1) % AD_SLIDES.len());
    if let Ok(handle) = set_interval_with_handle(advance, SLIDE_INTERVAL) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section class="ad-slider">
            {AD_SLIDES
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div class=move || {
                            if active.get() == i { "slide active" } else { "slide" }
                        }>
                            <img src=slide.image alt=slide.headline />
                            <div class="slide-caption">
                                <h2>{slide.headline}</h2>
                                <p>{slide.tagline}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="slider-dots">
                {(0..AD_SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == i { "dot active" } else { "dot" }
                                }
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| set_active.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
