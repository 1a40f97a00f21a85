use dioxus::prelude::*;
use grad_invite::use_theme_provider;
use grad_invite::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_theme_provider();
    let current = theme.theme().map(|t| t.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "app",
            "data-theme": "{current}",
            document::Link { rel: "icon", href: FAVICON }
            Router::<Route> {}
        }
    }
}
