use dioxus::prelude::*;

use crate::hooks::use_theme;
use crate::theme::{ toggle_view, Theme };
use crate::utils::{ class_if, class_names };

/// Fire/leaf switch. Draws nothing until the stored theme has been read,
/// so the first client paint never shows a guessed theme.
#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_theme();
    let Some(view) = toggle_view(ctx.theme()) else {
        return rsx! {};
    };

    let toggle = ctx;
    let label = format!("Chuyển sang {}", view.next_meta.label);

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| {
                let next = toggle.toggle();
                log::info!("Theme switched to {}", next);
            },
            span {
                class: "theme-toggle__dot",
                style: "background-color: {view.current_meta.color}",
            }
            span { class: "theme-toggle__icons",
                for theme in Theme::ALL {
                    span {
                        key: "{theme}",
                        class: class_names(&[
                            "theme-toggle__icon",
                            class_if(theme == view.current, "is-entering"),
                            class_if(theme != view.current, "is-exiting"),
                        ]),
                        {theme.meta().icon}
                    }
                }
            }
            span { class: "theme-toggle__label", "{view.current_meta.label}" }
        }
    }
}
