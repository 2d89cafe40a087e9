use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates register one of these so `AppNavbar` can render localized
/// `Link`s without knowing each platform's `Route` enum.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     map: |label| rsx!( Link { class: "navbar__link", to: Route::HistoricalMapList {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub map: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code so labels refresh.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            debug!(lang = %val, "language switched");
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let map = (b.map)(&t!("nav-map"));
        rsx! {
            nav { class: "navbar__links",
                {home}
                {map}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("hero-title")} }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
