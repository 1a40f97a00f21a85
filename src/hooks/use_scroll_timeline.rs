use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::scroll::{ mount_page_timeline, PageTimeline };

/// Runs the smooth-scroll timeline while the calling component is mounted.
pub fn use_scroll_timeline() {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<PageTimeline>)));

    let mount_slot = slot.clone();
    use_effect(move || {
        if mount_slot.borrow().is_some() {
            return;
        }
        *mount_slot.borrow_mut() = mount_page_timeline();
    });

    use_drop(move || {
        if let Some(timeline) = slot.borrow_mut().take() {
            timeline.unmount();
        }
    });
}
