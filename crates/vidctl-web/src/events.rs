use crate::context::ControlContext;
use crate::dom;
use vidctl_core::{apply, command_for_key, PlaybackProbe};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(ctx: ControlContext, document: &web::Document) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ctx, &ev);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn handle_keydown(ctx: &ControlContext, ev: &web::KeyboardEvent) {
    if dom::is_editable_target(ev.target()) {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(video) = dom::find_active_video(&document) else {
        return;
    };
    let key = ev.key();
    let Some(cmd) = command_for_key(&key) else {
        return;
    };

    let probe = PlaybackProbe {
        rate: video.playback_rate(),
        clock: video.current_time(),
    };
    {
        let mut state = ctx.state.borrow_mut();
        let mut accel = ctx.accel.borrow_mut();
        apply(cmd, &mut state, &mut accel, probe);
        log::info!(
            "[keys] {:?}: speed={:.2} saturation={:.2} accel={}",
            cmd,
            state.speed,
            state.saturation,
            accel.enabled
        );
    }
    dom::apply_control_state(&ctx.state.borrow(), &video);
    ctx.overlay.refresh(&ctx.snapshot());
}
