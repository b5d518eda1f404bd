//! # itinerary-ui
//!
//! Leptos components for a travel itinerary: day sections holding draggable
//! activity cards with type-based icons and colors.
//!
//! The crate is presentational. Drag gestures are tracked by an external
//! sortable coordinator behind [`state::drag::SortableCoordinator`]; the
//! [`app::ItineraryBoard`] root owns activity order and applies drops.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// Browser entry point: parse itinerary (and optional config) JSON handed over
/// by the host page and mount the board to `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_itinerary(itinerary_json: &str, config_json: Option<String>) -> Result<(), wasm_bindgen::JsValue> {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }

    let itinerary = state::itinerary::Itinerary::from_json(itinerary_json)
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    let config = match config_json {
        Some(raw) => config::ItineraryConfig::from_json(&raw)
            .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?,
        None => config::ItineraryConfig::default(),
    };

    log::info!("mounting itinerary: {} days, {} activities", itinerary.days.len(), itinerary.activity_count());
    let days = itinerary.days;
    leptos::mount::mount_to_body(move || view! { <app::ItineraryBoard days=days config=config/> });
    Ok(())
}
