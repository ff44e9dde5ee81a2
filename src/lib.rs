#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod host;
mod panel;
mod toast;

use config::PanelConfig;
use host::HostChannel;
use panel::{Panel, PanelElements};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dj-panel starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = PanelConfig::from_window(&window);
    log::info!("[panel] host resource={}", config.resource);

    let elements = PanelElements::bind(&document)?;
    let panel = Rc::new(RefCell::new(Panel::new(
        document.clone(),
        elements,
        HostChannel::new(config.resource),
    )));

    events::wire_controls(&panel);
    events::wire_host_messages(panel);

    // Hidden until the host sends OPEN
    dom::set_visible(&document, false);
    Ok(())
}
