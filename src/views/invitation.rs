use dioxus::prelude::*;

use crate::components::Reveal;
use crate::configs::{ countdown, Countdown, INVITATION };
use crate::hooks::use_scroll_timeline;
use crate::utils::{ ms_until_next_minute, sleep_ms };

#[component]
pub fn Invitation() -> Element {
    use_scroll_timeline();

    let details = &*INVITATION;
    let mut now = use_signal(|| chrono::Local::now().naive_local());
    use_future(move || async move {
        loop {
            sleep_ms(ms_until_next_minute(*now.peek())).await;
            now.set(chrono::Local::now().naive_local());
        }
    });
    let date_label = details.ceremony_date_label();
    let time_label = details.ceremony_time_label();

    rsx! {
        header { class: "hero",
            p { class: "hero__eyebrow", "Trân trọng kính mời" }
            h1 { class: "hero__title", "Lễ Tốt Nghiệp" }
            p { class: "hero__name", "{details.graduate}" }
            p { class: "hero__degree", "{details.degree} · {details.school}" }
        }

        Reveal { id: "details", class: "card",
            h2 { "Thời gian & địa điểm" }
            dl { class: "details",
                dt { "Ngày" }
                dd { "{date_label}" }
                dt { "Giờ" }
                dd { "{time_label}" }
                dt { "Địa điểm" }
                dd { "{details.venue}" }
                dt { "Địa chỉ" }
                dd {
                    a { href: details.map_url, target: "_blank", rel: "noopener", "{details.address}" }
                }
            }
        }

        Reveal { id: "countdown", class: "card",
            h2 { "Đếm ngược" }
            CountdownView { value: countdown(details.ceremony, now()) }
        }

        Reveal { id: "message", class: "card card--message",
            p { "{details.rsvp_note}" }
        }
    }
}

#[component]
fn CountdownView(value: Countdown) -> Element {
    match value {
        Countdown::Upcoming { days, hours, minutes } => rsx! {
            div { class: "countdown",
                CountdownUnit { amount: days, unit: "ngày" }
                CountdownUnit { amount: hours, unit: "giờ" }
                CountdownUnit { amount: minutes, unit: "phút" }
            }
        },
        Countdown::Started => rsx! {
            p { class: "countdown countdown--started", "Buổi lễ đã bắt đầu!" }
        },
    }
}

#[component]
fn CountdownUnit(amount: i64, unit: &'static str) -> Element {
    rsx! {
        div { class: "countdown__unit",
            span { class: "countdown__amount", "{amount}" }
            span { class: "countdown__label", "{unit}" }
        }
    }
}
