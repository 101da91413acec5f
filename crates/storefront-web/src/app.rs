//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{SiteFooter, SiteNav};
use crate::pages::{AboutPage, HomePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SiteNav />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}
