#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod context;
mod dom;
mod engine;
mod events;
mod overlay;
mod registry;

use context::ControlContext;
use registry::MediaRegistry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vidctl starting");

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

    // One context object threaded through every component; no globals.
    let ctx = ControlContext::new(&document)?;

    events::wire_global_keydown(ctx.clone(), &document);

    let registry = MediaRegistry::new(ctx);
    registry.discover(&document);
    registry.observe(&document)?;

    Ok(())
}
