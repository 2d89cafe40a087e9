use std::sync::Arc;

use api::{EmbeddedCatalog, LocalProgress};
use dioxus::prelude::*;
use tracing::error;

use crate::components::{EraPicker, LearningPath};
use crate::core::era::{initial_era, EraCode};
use crate::core::fallback::{CancellationToken, SelectError};
use crate::core::session::{
    change_era, lesson_path, load_home, map_path, EraStep, HomeDisplay, HomeRequest, HomeSnapshot,
    Notice, Viewer,
};
use crate::core::storage::PreferenceFile;
use crate::i18n::era_name;
use crate::t;
use crate::Hero;

/// Collaborators the home page talks to; provided as context by the platform.
#[derive(Clone)]
pub struct HomeServices {
    pub tracks: Arc<EmbeddedCatalog>,
    pub progress: LocalProgress,
    pub prefs: PreferenceFile,
}

impl HomeServices {
    pub fn platform_default() -> Self {
        let tracks = EmbeddedCatalog::load().unwrap_or_else(|err| {
            error!(error = %err, "embedded track catalog is unreadable");
            EmbeddedCatalog::default()
        });
        Self {
            tracks: Arc::new(tracks),
            progress: LocalProgress::new(),
            prefs: PreferenceFile::platform_default(),
        }
    }
}

/// Landing page: era picker, learning path and map shortcut. Navigation is
/// delegated to the platform through `on_navigate` (a route path).
#[component]
pub fn HomeScreen(on_navigate: EventHandler<String>) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let services = use_context::<HomeServices>();
    let viewer_ctx: Option<Signal<Option<Viewer>>> = try_use_context();
    let viewer = viewer_ctx.and_then(|s| s());

    let mut selected_era = use_signal({
        let services = services.clone();
        let viewer = viewer.clone();
        move || {
            let stored = viewer
                .as_ref()
                .and_then(|v| services.prefs.preferred_era(&v.user_id).ok().flatten());
            initial_era(stored.as_ref())
        }
    });
    let mut outcome = use_signal(|| Option::<Result<HomeSnapshot, SelectError>>::None);
    let mut loading = use_signal(|| true);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut active_token = use_signal(|| Option::<CancellationToken>::None);
    let mut reload = use_signal(|| 0u32);

    {
        let services = services.clone();
        use_effect(move || {
            let era = selected_era();
            let _ = reload();
            let viewer = viewer_ctx.and_then(|s| s());

            if let Some(previous) = active_token.peek().as_ref() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            active_token.set(Some(token.clone()));
            loading.set(true);

            let services = services.clone();
            spawn(async move {
                let request = HomeRequest { viewer, era };
                let result =
                    load_home(&request, services.tracks.as_ref(), &services.progress, &token).await;
                // A newer selection owns the page state now.
                if token.is_cancelled() || result == Err(SelectError::Cancelled) {
                    return;
                }
                outcome.set(Some(result));
                loading.set(false);
            });
        });
    }

    let on_era_change = use_callback({
        let services = services.clone();
        move |era: EraCode| {
            selected_era.set(era.clone());
            let viewer = viewer_ctx.and_then(|s| s.peek().clone());
            let prefs = services.prefs.clone();
            spawn(async move {
                let result = change_era(viewer.as_ref(), &era, &prefs).await;
                notice.set(Some(result));
            });
        }
    });

    let latest = outcome();
    let display = HomeDisplay::resolve(viewer.as_ref(), latest.as_ref());
    let shown_era = match &display {
        HomeDisplay::Path(snapshot) => snapshot.era.clone(),
        _ => selected_era(),
    };
    let is_loading = loading();

    let on_view_map = {
        let era = shown_era.clone();
        move |_: MouseEvent| on_navigate.call(map_path(Some(&era)))
    };
    let on_prev = move |_: MouseEvent| on_era_change.call(EraStep::Prev.apply(&selected_era()));
    let on_next = move |_: MouseEvent| on_era_change.call(EraStep::Next.apply(&selected_era()));
    let on_keydown = move |evt: KeyboardEvent| {
        if let Some(step) = EraStep::from_key(&evt.key().to_string()) {
            evt.prevent_default();
            on_era_change.call(step.apply(&selected_era()));
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        Hero { era: Some(shown_era.clone()) }
        section {
            class: "page page-home",
            tabindex: 0,
            onkeydown: on_keydown,

            p { class: "page-home__tagline", {t!("hero-tagline")} }

            div { class: "page-home__toolbar",
                button {
                    r#type: "button",
                    class: "button--primary page-home__map",
                    disabled: is_loading,
                    onclick: on_view_map,
                    if is_loading {
                        span { class: "spinner", aria_hidden: "true" }
                    } else {
                        span { aria_hidden: "true", "🗺️" }
                    }
                    {t!("home-view-map")}
                }
                EraPicker {
                    era: shown_era.clone(),
                    disabled: is_loading,
                    on_change: on_era_change,
                }
            }

            if let Some(current) = notice() {
                div { class: current.css_class(), role: "status",
                    "{current.message}"
                    button {
                        r#type: "button",
                        class: "notice__dismiss",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }

            button {
                r#type: "button",
                class: "page-home__arrow page-home__arrow--prev",
                aria_label: t!("home-prev-era"),
                onclick: on_prev,
                "‹"
            }
            button {
                r#type: "button",
                class: "page-home__arrow page-home__arrow--next",
                aria_label: t!("home-next-era"),
                onclick: on_next,
                "›"
            }

            main { class: "page-home__main",
                match display {
                    HomeDisplay::SignedOut => rsx! {
                        div { class: "page-home__empty",
                            span { class: "page-home__mascot", aria_label: t!("home-mascot-alt"), "🦉" }
                            p { class: "page-home__bubble", {t!("home-signed-out")} }
                        }
                    },
                    HomeDisplay::Loading => rsx! {
                        p { class: "page-home__loading", {t!("home-loading")} }
                    },
                    HomeDisplay::NoContent => rsx! {
                        div { class: "page-home__empty",
                            span { class: "page-home__mascot", aria_label: t!("home-mascot-alt"), "🦉" }
                            p { class: "page-home__bubble",
                                {t!("home-no-content")}
                                br {}
                                {t!("home-no-content-hint")}
                            }
                            button {
                                r#type: "button",
                                class: "button--primary",
                                onclick: move |_| reload += 1,
                                {t!("home-retry")}
                            }
                        }
                    },
                    HomeDisplay::Path(snapshot) => rsx! {
                        if snapshot.used_fallback {
                            p { class: "page-home__fallback",
                                {t!("home-fallback-note", era = era_name(&selected_era()), fallback = era_name(&snapshot.era))}
                            }
                        }
                        h2 { class: "page-home__title", {t!("home-journey-title")} }
                        LearningPath {
                            projection: snapshot.projection.clone(),
                            on_lesson: move |id: String| on_navigate.call(lesson_path(&id)),
                        }
                    },
                }
            }
        }
    }
}
