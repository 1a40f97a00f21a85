use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::{ FrameTicker, TriggerRegistry };

pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fresh_registries() -> (Rc<RefCell<FrameTicker>>, Rc<RefCell<TriggerRegistry>>) {
    (Rc::new(RefCell::new(FrameTicker::new())), Rc::new(RefCell::new(TriggerRegistry::new())))
}
