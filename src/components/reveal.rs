use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::scroll::{ global_triggers, TriggerId, TriggerSpec };
use crate::utils::{ class_if, class_names };

/// Fraction of the viewport height at which a section starts to reveal.
pub const REVEAL_OFFSET: f64 = 0.85;

/// Trigger range for a section whose top sits `top` pixels down the page.
pub fn reveal_spec(top: f64, height: f64, viewport: f64) -> TriggerSpec {
    let start = top - viewport * REVEAL_OFFSET;
    TriggerSpec {
        start,
        end: start.max(top + height),
        once: true,
    }
}

#[cfg(target_arch = "wasm32")]
fn register_reveal(id: &str) -> Option<TriggerId> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    let viewport = window.inner_height().ok()?.as_f64()?;
    let top = rect.top() + crate::scroll::current_scroll(&window);

    let triggers = global_triggers();
    let trigger = triggers.borrow_mut().create(
        reveal_spec(top, rect.height(), viewport),
        move |state| {
            if state.active || state.progress >= 1.0 {
                if let Err(e) = element.class_list().add_1("is-visible") {
                    log::warn!("Failed to reveal section: {:?}", e);
                }
            }
        }
    );
    triggers.borrow_mut().refresh();
    Some(trigger)
}

#[cfg(not(target_arch = "wasm32"))]
fn register_reveal(id: &str) -> Option<TriggerId> {
    log::debug!("Section {} shown without scroll trigger", id);
    None
}

/// Section that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    #[props(into)] id: String,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    let trigger = use_hook(|| Rc::new(Cell::new(None::<TriggerId>)));

    let register = trigger.clone();
    let register_id = id.clone();
    use_effect(move || {
        if register.get().is_none() {
            register.set(register_reveal(&register_id));
        }
    });

    use_drop(move || {
        if let Some(id) = trigger.take() {
            global_triggers().borrow_mut().kill(id);
        }
    });

    let static_visible = cfg!(not(target_arch = "wasm32"));
    rsx! {
        section {
            id: "{id}",
            class: class_names(&["reveal", class.as_str(), class_if(static_visible, "is-visible")]),
            {children}
        }
    }
}
