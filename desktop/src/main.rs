#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{EraCode, Viewer};
use ui::views::{HomeScreen, HomeServices, LessonScreen, MapScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/lesson/:id")]
    Lesson { id: String },
    #[route("/historical-map/list")]
    HistoricalMapList {},
    #[route("/historical-map/:era")]
    HistoricalMap { era: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Desktop installs are single-user; progress and preferences belong to this profile.
const LOCAL_USER: &str = "local";

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Chronopath – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_map(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::HistoricalMapList {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // Single local profile. Hosts that provide no viewer get the signed-out home.
    use_context_provider(|| Signal::new(Some(Viewer::new(LOCAL_USER))));
    use_context_provider(HomeServices::platform_default);

    register_nav(NavBuilder {
        home: nav_home,
        map: nav_map,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts after a switch.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let nav = navigator();
    rsx! {
        HomeScreen { on_navigate: move |path: String| { nav.push(path); } }
    }
}

#[component]
fn Lesson(id: String) -> Element {
    let nav = navigator();
    rsx! {
        LessonScreen { id, on_navigate: move |path: String| { nav.push(path); } }
    }
}

#[component]
fn HistoricalMapList() -> Element {
    let nav = navigator();
    let era: Option<EraCode> = None;
    rsx! {
        MapScreen { era, on_navigate: move |path: String| { nav.push(path); } }
    }
}

#[component]
fn HistoricalMap(era: String) -> Element {
    let nav = navigator();
    let era: Option<EraCode> = Some(EraCode::from(era));
    rsx! {
        MapScreen { era, on_navigate: move |path: String| { nav.push(path); } }
    }
}
