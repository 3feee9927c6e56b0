use crate::context::ControlContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vidctl_core::accel::eased_rate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-video acceleration loop driven by requestAnimationFrame.
///
/// The loop re-arms itself only while its generation token matches the
/// value it was started with and the video is still playing; pause,
/// ended, and removal all bump the token, so cancellation is a decision
/// made by the registry, not inferred per tick.
pub fn start_loop(ctx: ControlContext, video: web::HtmlVideoElement, generation: Rc<Cell<u64>>) {
    let my_gen = generation.get();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if generation.get() != my_gen || video.paused() || video.ended() {
            return;
        }
        tick_once(&ctx, &video);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn tick_once(ctx: &ControlContext, video: &web::HtmlVideoElement) {
    let eased = {
        let accel = ctx.accel.borrow();
        if !accel.enabled {
            return;
        }
        eased_rate(&accel, video.current_time(), video.duration())
    };
    if let Some(rate) = eased {
        video.set_playback_rate(rate);
        ctx.state.borrow_mut().set_speed(rate);
    }
    ctx.overlay.refresh(&ctx.snapshot());
}
