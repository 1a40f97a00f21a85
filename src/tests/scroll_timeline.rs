use crate::scroll::{
    global_ticker,
    global_triggers,
    mount_page_timeline,
    ScrollTimeline,
    TriggerSpec,
    SMOOTH_DURATION_SECS,
};
use crate::tests::common::{ fresh_registries, setup };

#[test]
fn repeated_mount_cycles_leave_nothing_behind() {
    setup();
    let (ticker, triggers) = fresh_registries();

    for cycle in 0..5 {
        let timeline = ScrollTimeline::mount(cycle % 2 == 0, ticker.clone(), triggers.clone());
        for i in 0..3 {
            let start = (i as f64) * 100.0;
            triggers.borrow_mut().create(TriggerSpec { start, end: start + 50.0, once: false }, |_| {});
        }
        ticker.borrow_mut().tick((cycle as f64) * 16.0);
        assert_eq!(ticker.borrow().len(), 1);
        assert_eq!(triggers.borrow().len(), 3);

        timeline.unmount();
        assert_eq!(ticker.borrow().len(), 0);
        assert_eq!(triggers.borrow().len(), 0);
    }
}

#[test]
fn unmounted_emulator_stops_receiving_frames() {
    setup();
    let (ticker, triggers) = fresh_registries();
    let timeline = ScrollTimeline::mount(false, ticker.clone(), triggers);
    let emulator = timeline.emulator();
    emulator.borrow_mut().set_limit(1000.0);
    emulator.borrow_mut().on_wheel(500.0);
    ticker.borrow_mut().tick(0.0);
    let before = emulator.borrow().scroll();

    timeline.unmount();
    ticker.borrow_mut().tick(5000.0);
    assert_eq!(emulator.borrow().scroll(), before);
}

#[test]
fn motion_preference_shapes_the_emulator() {
    let (ticker, triggers) = fresh_registries();

    let smooth = ScrollTimeline::mount(false, ticker.clone(), triggers.clone());
    let opts = *smooth.emulator().borrow().options();
    assert_eq!(opts.duration, SMOOTH_DURATION_SECS);
    assert!(opts.smooth_wheel);
    smooth.unmount();

    let reduced = ScrollTimeline::mount(true, ticker, triggers);
    let opts = *reduced.emulator().borrow().options();
    assert_eq!(opts.duration, 0.0);
    assert!(!opts.smooth_wheel);
    reduced.unmount();
}

#[test]
fn page_timeline_uses_page_wide_registries() {
    setup();
    let timeline = mount_page_timeline().expect("native timeline always mounts");
    assert_eq!(global_ticker().borrow().len(), 1);
    global_triggers()
        .borrow_mut()
        .create(TriggerSpec { start: 0.0, end: 1.0, once: false }, |_| {});

    timeline.unmount();
    assert!(global_ticker().borrow().is_empty());
    assert!(global_triggers().borrow().is_empty());
}
