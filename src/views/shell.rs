use dioxus::prelude::*;

use crate::configs::{ font_variables, google_fonts_href, SITE_METADATA };
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Layout wrapping every page: document head, fonts and navigation.
#[component]
pub fn Shell() -> Element {
    let meta = &*SITE_METADATA;

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: meta.description }
        document::Meta { name: "keywords", content: meta.keywords_content() }
        document::Meta { name: "author", content: meta.author }
        document::Meta { name: "viewport", content: meta.viewport.content() }
        for (property, content) in meta.open_graph_tags() {
            document::Meta { key: "{property}", property: property, content: content }
        }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        document::Link { rel: "stylesheet", href: google_fonts_href() }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div {
            class: "shell",
            style: font_variables(),
            nav {
                class: "shell__nav",
                Link { class: "shell__link", active_class: "is-active", to: Route::Invitation, "Thư mời" }
                Link { class: "shell__link", active_class: "is-active", to: Route::PokemonSkin, "Pokémon" }
            }
            main { class: "shell__main",
                Outlet::<Route> {}
            }
        }
    }
}
