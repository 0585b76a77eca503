use crate::scene::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop driving one scene. Dropping the handle does not
/// stop it; call `stop`.
pub struct FrameLoop {
    tick: Tick,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(scene: Rc<RefCell<Scene>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        scene.borrow_mut().frame();
        if let Some(id) = tick_clone.borrow().as_ref().and_then(request_frame) {
            pending_tick.set(Some(id));
        }
    }) as Box<dyn FnMut()>));

    if let Some(id) = tick.borrow().as_ref().and_then(request_frame) {
        pending.set(Some(id));
    }

    FrameLoop {
        tick,
        running,
        pending,
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

impl FrameLoop {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so the scene can be freed
        self.tick.borrow_mut().take();
    }
}
