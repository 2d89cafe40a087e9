use dioxus::prelude::*;

use crate::core::projector::{LessonStatus, LessonView, PathProjection};
use crate::t;

/// Winding chapter-by-chapter path of lesson nodes. The mascot marks the
/// node at `projection.mascot_index`.
#[component]
pub fn LearningPath(projection: PathProjection, on_lesson: EventHandler<String>) -> Element {
    let mascot = projection.mascot_index;
    let chapters = projection.chapters.iter().zip(projection.chapter_ranges());

    rsx! {
        div { class: "learning-path",
            for (chapter, range) in chapters {
                section { class: "learning-path__chapter", key: "{chapter.title}",
                    header { class: "learning-path__chapter-header",
                        h3 { "{chapter.title}" }
                        if !chapter.description.is_empty() {
                            p { class: "learning-path__chapter-description", "{chapter.description}" }
                        }
                    }
                    ol { class: "learning-path__nodes",
                        for idx in range {
                            if let Some(lesson) = projection.lesson_at(idx) {
                                PathNode {
                                    key: "{lesson.id}",
                                    lesson: lesson.clone(),
                                    // Alternate nodes left/right for the winding layout.
                                    offset_right: idx % 2 == 1,
                                    has_mascot: mascot == Some(idx),
                                    on_select: on_lesson,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PathNode(
    lesson: LessonView,
    offset_right: bool,
    has_mascot: bool,
    on_select: EventHandler<String>,
) -> Element {
    let side = if offset_right {
        "path-node--right"
    } else {
        "path-node--left"
    };
    let class = format!("path-node {} {side}", lesson.status.css_class());
    let locked = lesson.status == LessonStatus::Locked;
    let id = lesson.id.clone();

    rsx! {
        li { class: "{class}",
            if has_mascot {
                span { class: "path-node__mascot", aria_label: t!("home-mascot-alt"), "🦉" }
            }
            button {
                r#type: "button",
                class: "path-node__button",
                disabled: locked,
                title: lesson.description.clone().unwrap_or_default(),
                onclick: move |_| on_select.call(id.clone()),
                span { class: "path-node__emoji", "{lesson.emoji}" }
            }
            div { class: "path-node__meta",
                span { class: "path-node__title", "{lesson.title}" }
                span { class: "path-node__xp", {t!("path-xp", xp = lesson.xp)} }
                if let Some(year) = lesson.year {
                    span { class: "path-node__year", {t!("path-year", year = year)} }
                }
                if lesson.status == LessonStatus::Completed {
                    span { class: "path-node__done", {t!("path-completed")} }
                }
            }
        }
    }
}
