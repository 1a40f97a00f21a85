use chrono::{ NaiveDateTime, Timelike };

/// Milliseconds from `now` to the start of the next wall-clock minute.
pub fn ms_until_next_minute(now: NaiveDateTime) -> u32 {
    let into_minute = now.second() * 1000 + (now.nanosecond() / 1_000_000).min(999);
    60_000 - into_minute
}

/// Resolves after `ms` milliseconds without blocking the render loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(
        &mut (|resolve, _reject| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if
                let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    &resolve,
                    ms as i32
                )
            {
                log::warn!("setTimeout failed: {:?}", e);
            }
        })
    );
    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        log::warn!("Timer rejected: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    let (tx, rx) = futures::channel::oneshot::channel();
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
        let _ = tx.send(());
    });
    let _ = rx.await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 11, 20)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn waits_until_the_minute_turns() {
        assert_eq!(ms_until_next_minute(at(8, 0, 0, 0)), 60_000);
        assert_eq!(ms_until_next_minute(at(8, 0, 45, 250)), 14_750);
        assert_eq!(ms_until_next_minute(at(8, 0, 59, 999)), 1);
    }

    #[test]
    fn sleep_resolves() {
        let start = std::time::Instant::now();
        futures::executor::block_on(sleep_ms(20));
        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
    }
}
