use dioxus::prelude::*;

use crate::core::era::{EraCode, ERA_OPTIONS};
use crate::i18n::era_name;
use crate::t;

/// Dropdown listing every catalog era; the active one is ringed.
#[component]
pub fn EraPicker(era: EraCode, disabled: bool, on_change: EventHandler<EraCode>) -> Element {
    let mut open = use_signal(|| false);

    let label = match era.option() {
        Some(_) => era_name(&era),
        None => t!("home-change-era"),
    };

    rsx! {
        div { class: "era-picker",
            button {
                r#type: "button",
                class: "era-picker__trigger button--outline",
                disabled,
                aria_expanded: "{open()}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                span { class: "era-picker__icon", aria_hidden: "true", "📚" }
                "{label}"
                span { class: "era-picker__chevron", aria_hidden: "true", "▾" }
            }

            if open() {
                ul { class: "era-picker__menu", role: "listbox",
                    for option in ERA_OPTIONS.iter() {
                        li { key: "{option.code}",
                            button {
                                r#type: "button",
                                class: option_class(option.code == era.as_str()),
                                disabled,
                                onclick: {
                                    let code = option.code();
                                    move |_| {
                                        open.set(false);
                                        on_change.call(code.clone());
                                    }
                                },
                                span { class: "era-picker__emoji", "{option.emoji}" }
                                {era_name(&option.code())}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "era-picker__option era-picker__option--active"
    } else {
        "era-picker__option"
    }
}
