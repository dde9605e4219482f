// Komodo Landing Page — Leptos 0.8 Edition
// Developed with 🦎 by The Komodo Team (c)2025

mod dom;
mod logging;
mod sections;

use komodo::LandingConfig;
use leptos::prelude::*;
use sections::*;

/// Embedded at build time so the page needs no extra fetch.
const CONFIG_TOML: &str = include_str!("../komodo.toml");

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Parses the embedded config. Logging is installed here so its level can
/// come from the same file.
fn load_config() -> LandingConfig {
    match LandingConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => {
            logging::init(config.logging.level());
            config
        }
        Err(err) => {
            logging::init(tracing::Level::INFO);
            tracing::warn!(%err, "invalid komodo.toml, using defaults");
            LandingConfig::default()
        }
    }
}

#[component]
fn App(config: LandingConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <ConsoleBanner />
        <main>
            <Hero />
            <WhatIs />
            <Statement />
            <FeatureShowcase />
        </main>
        <Footer />
    }
}
