//! Browser frame driver backed by `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::FrameDriver;

/// Shared slot for the frame callback.
///
/// The callback captures the scheduler, and the scheduler owns this driver,
/// so the closure is installed after construction through the shared slot.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on the global window
pub struct AnimationFrames {
    window: web_sys::Window,
    callback: FrameCallback,
}

impl AnimationFrames {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot the frame closure must be stored in before the first request
    pub fn callback_slot(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl FrameDriver for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> i32 {
        let slot = self.callback.borrow();
        let Some(closure) = slot.as_ref() else {
            log::warn!("Frame requested before callback was installed");
            return 0;
        };
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                0
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}
