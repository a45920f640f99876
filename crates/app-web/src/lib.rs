#![cfg(target_arch = "wasm32")]

mod constellation;
mod curtain;
mod dom;
mod stats;
mod ui;
mod wave;

use wasm_bindgen::prelude::*;

const HERO_WAVE_CANVAS_ID: &str = "bp-hero-wave";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("biopulse app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    curtain::init(&document);
    if wave::attach(HERO_WAVE_CANVAS_ID).is_none() {
        log::info!("[wave] #{HERO_WAVE_CANVAS_ID} absent; hero wave disabled");
    }
    constellation::init(&document);
    stats::init(&document);

    ui::init_mobile_menu(&document);
    ui::init_accordions(&document);
    ui::init_tabs(&document);
    ui::init_forms(&document);
    ui::init_footer_year(&document);

    Ok(())
}

/// Start (or re-join) the hero wave; exposed so the host page can
/// restart the effect after tearing it down.
#[wasm_bindgen]
pub fn bp_start_hero_wave() -> bool {
    wave::attach(HERO_WAVE_CANVAS_ID).is_some()
}

/// Stop the hero wave and release its frame loop and listeners.
#[wasm_bindgen]
pub fn bp_stop_hero_wave() {
    wave::detach_by_id(HERO_WAVE_CANVAS_ID);
}

/// Show the page toast.
#[wasm_bindgen]
pub fn bp_toast(message: &str) {
    ui::show_toast(message);
}
