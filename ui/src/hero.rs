use dioxus::prelude::*;

use crate::core::era::{era_backdrop_class, EraCode};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Full-screen gradient backdrop behind the home page, tinted per era.
#[component]
pub fn Hero(era: Option<EraCode>) -> Element {
    let backdrop = era_backdrop_class(era.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        div { class: "hero {backdrop}", aria_hidden: "true",
            div { class: "hero__aurora" }
            div { class: "hero__sparkles" }
            div { class: "hero__vignette" }
            div { class: "hero__horizon" }
        }
    }
}
