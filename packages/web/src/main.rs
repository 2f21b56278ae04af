use dioxus::prelude::*;
use std::env;

use views::{Home, LangHome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    // Language-scoped paths like /vn/ render the same page; the segment is
    // a detection signal read by the language selector, not a real route.
    #[route("/:..segments")]
    LangHome { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    eprintln!("startup: IP={ip} PORT={port}");
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { property: "og:locale", content: "en_US" }
        ui::SiteTheme {}
        ui::ToastProvider {
            ui::LangProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Web-specific layout: the shared navbar above the routed page body.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        ui::Navbar {}
        div { class: "site_container route_view", Outlet::<Route> {} }
    }
}
