use dioxus::prelude::*;
use tracing::warn;

use crate::core::session::Viewer;
use crate::t;
use crate::views::HomeServices;

/// Lesson stub. Signed-in viewers can record the lesson as completed, which
/// the home path picks up on its next load.
#[component]
pub fn LessonScreen(id: String, on_navigate: EventHandler<String>) -> Element {
    let services = use_context::<HomeServices>();
    let viewer_ctx: Option<Signal<Option<Viewer>>> = try_use_context();
    let viewer = viewer_ctx.and_then(|s| s());

    let lesson_id = id.clone();
    let on_complete = move |_: MouseEvent| {
        if let Some(viewer) = viewer_ctx.and_then(|s| s.peek().clone()) {
            if let Err(err) = services.progress.mark_completed(&viewer.user_id, &lesson_id) {
                warn!(lesson = %lesson_id, error = %err, "failed to record lesson completion");
            }
        }
        on_navigate.call("/".to_string());
    };

    rsx! {
        section { class: "page page-lesson",
            h1 { {t!("lesson-title", id = id.clone())} }
            p { class: "page-lesson__placeholder", {t!("lesson-placeholder")} }
            div { class: "page-lesson__actions",
                if viewer.is_some() {
                    button {
                        r#type: "button",
                        class: "button--primary",
                        onclick: on_complete,
                        {t!("lesson-complete")}
                    }
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
}
