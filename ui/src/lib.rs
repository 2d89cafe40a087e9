//! Shared UI crate for Chronopath. Cross-platform home-screen logic, views and
//! components live here; the `web` and `desktop` crates only wire routes.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod era_picker;
    pub use era_picker::EraPicker;

    mod learning_path;
    pub use learning_path::LearningPath;
}

mod hero;
pub use hero::Hero;

/// Shared theme, linked by the web shell and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
