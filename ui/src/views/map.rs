use dioxus::prelude::*;

use crate::core::era::{EraCode, ERA_OPTIONS};
use crate::core::session::map_path;
use crate::i18n::era_name;
use crate::t;

/// Map landing for one era, or the era list when `era` is `None`.
#[component]
pub fn MapScreen(era: Option<EraCode>, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        section { class: "page page-map",
            h1 { {t!("map-title")} }
            match era {
                Some(era) => rsx! {
                    p { class: "page-map__era", {t!("map-era", era = era_name(&era))} }
                    p { class: "page-map__placeholder", {t!("map-placeholder")} }
                },
                None => rsx! {
                    h2 { {t!("map-all-eras")} }
                    ul { class: "page-map__eras",
                        for option in ERA_OPTIONS.iter() {
                            li { key: "{option.code}",
                                button {
                                    r#type: "button",
                                    class: "button--outline",
                                    onclick: {
                                        let code = option.code();
                                        move |_| on_navigate.call(map_path(Some(&code)))
                                    },
                                    "{option.emoji} "
                                    {era_name(&option.code())}
                                }
                            }
                        }
                    }
                },
            }
            button {
                r#type: "button",
                class: "button--outline",
                onclick: move |_| on_navigate.call("/".to_string()),
                {t!("lesson-back")}
            }
        }
    }
}
