use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vidctl_core::{FadeSchedule, StatusSnapshot, FADE_DELAY_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Transient status readout: a fixed, non-interactive div lazily
/// re-parented next to whichever video last started playing.
///
/// Exactly one fade timer is pending at a time: each refresh cancels
/// the previous host timeout and replaces the closure slot, and the
/// fade callback re-checks the schedule so a stale timer that slipped
/// through can never hide a freshly refreshed overlay.
pub struct Overlay {
    el: web::HtmlElement,
    schedule: Rc<RefCell<FadeSchedule>>,
    fade_timer: Cell<Option<i32>>,
    fade_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Overlay {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create overlay: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("overlay cast: {:?}", e))?;
        _ = el.set_attribute(
            "style",
            "position: absolute; top: 10px; left: 10px; margin: 10px; z-index: 9999; \
             pointer-events: none; opacity: 0; transition: opacity 0.5s ease-in-out;",
        );
        _ = el.class_list().add_1("video-control-overlay");
        Ok(Self {
            el,
            schedule: Rc::new(RefCell::new(FadeSchedule::new())),
            fade_timer: Cell::new(None),
            fade_cb: RefCell::new(None),
        })
    }

    /// Move the overlay into the video's container. Host pages remove
    /// and rebuild containers at will, so a missing parent just skips
    /// the attach.
    pub fn attach_near(&self, video: &web::HtmlVideoElement) {
        match video.parent_element() {
            Some(parent) => {
                _ = parent.append_child(&self.el);
            }
            None => log::warn!("[overlay] video has no parent; skipping attach"),
        }
    }

    /// Replace the readout, make it fully visible, and re-arm the fade.
    pub fn refresh(&self, snapshot: &StatusSnapshot) {
        self.el.set_inner_html(&render_status(snapshot));
        _ = self.el.style().set_property("opacity", "1");

        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.fade_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let deadline = self.schedule.borrow_mut().refresh(js_sys::Date::now());

        let el = self.el.clone();
        let schedule = self.schedule.clone();
        let cb = Closure::wrap(Box::new(move || {
            if !schedule.borrow().is_current(deadline) {
                return;
            }
            _ = el.style().set_property("opacity", "0");
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            FADE_DELAY_MS as i32,
        ) {
            Ok(handle) => self.fade_timer.set(Some(handle)),
            Err(e) => log::warn!("[overlay] fade timer: {:?}", e),
        }
        // Replacing the slot drops the previous fade closure.
        *self.fade_cb.borrow_mut() = Some(cb);
    }
}

fn render_status(snapshot: &StatusSnapshot) -> String {
    format!(
        "<span style=\"color: aquamarine;\">Speed: {:.2}</span><br>\
         <span style=\"color: lightcoral;\">Saturation: {:.2}</span><br>\
         <span style=\"color: khaki;\">Acceleration: {}</span>",
        snapshot.speed,
        snapshot.saturation,
        if snapshot.accelerating { "on" } else { "off" },
    )
}
