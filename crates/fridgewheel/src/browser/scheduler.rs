//! `requestAnimationFrame` scheduling.

use fridgewheel_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

/// Slot holding the per-frame closure. It is filled after the wheel exists,
/// because the closure needs a handle back to the wheel.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Schedules frames on the browser's animation loop.
pub struct RafScheduler {
    window: Window,
    performance: Option<Performance>,
    callback: FrameCallback,
}

impl RafScheduler {
    /// Scheduler that invokes whatever closure `callback` holds.
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        let performance = window.performance();
        Self {
            window,
            performance,
            callback,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn now(&self) -> f64 {
        self.performance.as_ref().map_or(0.0, Performance::now)
    }

    fn request_frame(&mut self) -> FrameHandle {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            warn!("frame requested before the frame callback was installed");
            return FrameHandle(0);
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(id),
            Err(err) => {
                warn!(?err, "requestAnimationFrame failed");
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.window.cancel_animation_frame(handle.0).ok();
    }
}
