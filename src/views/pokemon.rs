use dioxus::prelude::*;

use crate::components::{ Reveal, ThemeToggle };
use crate::hooks::{ use_scroll_timeline, use_theme };
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub kind: &'static str,
    pub signature_move: &'static str,
    pub blurb: &'static str,
}

pub fn partner(theme: Theme) -> Partner {
    match theme {
        Theme::Fire =>
            Partner {
                name: "Charmander",
                kind: "Lửa",
                signature_move: "Ember",
                blurb: "Ngọn lửa trên đuôi cháy sáng khi nó hào hứng.",
            },
        Theme::Leaf =>
            Partner {
                name: "Bulbasaur",
                kind: "Cỏ",
                signature_move: "Vine Whip",
                blurb: "Hạt giống trên lưng lớn dần nhờ ánh nắng.",
            },
    }
}

#[component]
pub fn PokemonSkin() -> Element {
    use_scroll_timeline();
    let ctx = use_theme();

    rsx! {
        header { class: "hero hero--pokemon",
            h1 { class: "hero__title", "Chọn hệ của bạn" }
            ThemeToggle {}
        }

        if let Some(theme) = ctx.theme() {
            PartnerCard { partner: partner(theme) }
        }

        Reveal { id: "pokemon-note", class: "card",
            p { "Giao diện được lưu lại cho lần ghé thăm sau." }
        }
    }
}

#[component]
fn PartnerCard(partner: Partner) -> Element {
    rsx! {
        article { class: "card partner",
            h2 { class: "partner__name", "{partner.name}" }
            p { class: "partner__kind", "Hệ {partner.kind}" }
            p { class: "partner__move", "Chiêu thức: {partner.signature_move}" }
            p { "{partner.blurb}" }
        }
    }
}
