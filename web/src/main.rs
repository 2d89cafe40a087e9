use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{EraCode, Viewer};
use ui::views::{HomeScreen, HomeServices, LessonScreen, MapScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/lesson/:id")]
    Lesson { id: String },
    #[route("/historical-map/list")]
    HistoricalMapList {},
    #[route("/historical-map/:era")]
    HistoricalMap { era: String },
}

/// Browser profile id; preferences live in this origin's localStorage.
const LOCAL_USER: &str = "local";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_map(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::HistoricalMapList {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
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
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web-specific layout around the shared `AppNavbar`, so the outlet can use
/// this crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let nav = navigator();
    rsx! {
        HomeScreen {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
fn Lesson(id: String) -> Element {
    let nav = navigator();
    rsx! {
        LessonScreen {
            id,
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
fn HistoricalMapList() -> Element {
    let nav = navigator();
    let era: Option<EraCode> = None;
    rsx! {
        MapScreen {
            era,
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}

#[component]
fn HistoricalMap(era: String) -> Element {
    let nav = navigator();
    let era: Option<EraCode> = Some(EraCode::from(era));
    rsx! {
        MapScreen {
            era,
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }
    }
}
