use crate::context::ControlContext;
use crate::engine;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Marker attribute stamped on every instrumented video. Its presence
/// is the idempotence check; its value is the arena key.
const MARKER_ATTR: &str = "data-vidctl-id";

struct TrackedVideo {
    video: web::HtmlVideoElement,
    /// Cancellation token for the engine loop. Bumped on every
    /// play/pause/ended transition and on removal from the document;
    /// a loop whose generation no longer matches stops rescheduling.
    generation: Rc<Cell<u64>>,
    connected: Cell<bool>,
}

/// Discovers video elements, present at load or added later, and
/// instruments each exactly once.
pub struct MediaRegistry {
    ctx: ControlContext,
    tracked: RefCell<FnvHashMap<u32, TrackedVideo>>,
    next_id: Cell<u32>,
}

impl MediaRegistry {
    pub fn new(ctx: ControlContext) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            tracked: RefCell::new(FnvHashMap::default()),
            next_id: Cell::new(0),
        })
    }

    /// Scan the document for videos without the marker attribute and
    /// instrument them. Safe to re-run on every mutation batch: an
    /// unchanged DOM attaches nothing.
    pub fn discover(self: &Rc<Self>, document: &web::Document) {
        let videos = document.get_elements_by_tag_name("video");
        for i in 0..videos.length() {
            let Some(el) = videos.item(i) else {
                continue;
            };
            if el.has_attribute(MARKER_ATTR) {
                continue;
            }
            let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() else {
                continue;
            };
            self.instrument(video);
        }
    }

    /// Re-run discovery on structural DOM mutations anywhere under the
    /// body, and cancel loops of videos that left the document.
    pub fn observe(self: &Rc<Self>, document: &web::Document) -> anyhow::Result<()> {
        let Some(body) = document.body() else {
            log::warn!("[media] document has no body; mutation discovery disabled");
            return Ok(());
        };

        let registry = self.clone();
        let doc = document.clone();
        let cb = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: web::MutationObserver| {
                registry.discover(&doc);
                registry.prune_disconnected();
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

        let observer = web::MutationObserver::new(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("MutationObserver: {:?}", e))?;
        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(&body, &init)
            .map_err(|e| anyhow::anyhow!("observe: {:?}", e))?;
        cb.forget();
        Ok(())
    }

    fn instrument(self: &Rc<Self>, video: web::HtmlVideoElement) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        if video.set_attribute(MARKER_ATTR, &id.to_string()).is_err() {
            return;
        }
        let generation = Rc::new(Cell::new(0u64));

        // play: re-baseline the acceleration curve (it does not persist
        // across a pause/replay cycle), show the overlay, and start the
        // engine loop for this element.
        {
            let ctx = self.ctx.clone();
            let generation = generation.clone();
            let video_play = video.clone();
            let closure = Closure::wrap(Box::new(move |_: web::Event| {
                generation.set(generation.get() + 1);
                {
                    let mut accel = ctx.accel.borrow_mut();
                    accel.enabled = false;
                    accel.starting_speed = video_play.playback_rate();
                }
                ctx.overlay.attach_near(&video_play);
                ctx.overlay.refresh(&ctx.snapshot());
                log::info!("[media] play on video; engine loop gen {}", generation.get());
                engine::start_loop(ctx.clone(), video_play.clone(), generation.clone());
            }) as Box<dyn FnMut(_)>);
            _ = video.add_event_listener_with_callback("play", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // pause/ended: bump the generation so the loop stops on its
        // next tick instead of inferring its fate from play-state alone.
        for event in ["pause", "ended"] {
            let generation = generation.clone();
            let closure = Closure::wrap(Box::new(move |_: web::Event| {
                generation.set(generation.get() + 1);
            }) as Box<dyn FnMut(_)>);
            _ = video.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        log::info!("[media] instrumented video #{}", id);
        self.tracked.borrow_mut().insert(
            id,
            TrackedVideo {
                video,
                generation,
                connected: Cell::new(true),
            },
        );
    }

    fn prune_disconnected(&self) {
        for (id, t) in self.tracked.borrow().iter() {
            let connected = t.video.is_connected();
            if t.connected.get() && !connected {
                t.generation.set(t.generation.get() + 1);
                t.connected.set(false);
                log::info!("[media] video #{} left the document; loop cancelled", id);
            } else if !t.connected.get() && connected {
                // Re-added nodes keep their listeners; the next play
                // event restarts the loop.
                t.connected.set(true);
            }
        }
    }
}
