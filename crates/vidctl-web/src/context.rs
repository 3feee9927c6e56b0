use crate::overlay::Overlay;
use std::cell::RefCell;
use std::rc::Rc;
use vidctl_core::{AccelerationConfig, ControlState, StatusSnapshot};
use web_sys as web;

/// Shared state for the whole control layer, constructed once at
/// startup and cloned into every event closure. Cloning is cheap: the
/// fields are `Rc` handles onto the same state.
#[derive(Clone)]
pub struct ControlContext {
    pub state: Rc<RefCell<ControlState>>,
    pub accel: Rc<RefCell<AccelerationConfig>>,
    pub overlay: Rc<Overlay>,
}

impl ControlContext {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            state: Rc::new(RefCell::new(ControlState::new())),
            accel: Rc::new(RefCell::new(AccelerationConfig::new())),
            overlay: Rc::new(Overlay::create(document)?),
        })
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::capture(&self.state.borrow(), &self.accel.borrow())
    }
}
