//! Page Components

mod home;
mod about;

pub use home::HomePage;
pub use about::AboutPage;

/// Route components render below the fold of the previous page; reset the
/// viewport so each page starts at its hero.
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
