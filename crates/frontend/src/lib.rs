pub mod app;
pub mod config;
pub mod layout;

use contracts::tabs::TabsConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (TabsConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config::log_level(config.log_level));
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Falling back to default tab config: {}", e);
    }
    log::info!(
        "Mounting tabs with config {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
