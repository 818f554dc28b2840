use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use splatpage_core::config::ResizeConfig;
use web_sys::{Event, Window};

struct ResizeState {
    debounce_ms: u32,
    settle_ms: u32,
    debounce: RefCell<Option<Timeout>>,
    settle: RefCell<Option<Timeout>>,
    on_settled: Rc<dyn Fn()>,
}

impl ResizeState {
    // Replacing a pending `Timeout` drops it, which clears the browser timer.
    // A new resize also drops a pending settle so relayout only runs once the
    // whole burst is over.
    fn schedule(self: &Rc<Self>) {
        self.settle.borrow_mut().take();
        let state = Rc::clone(self);
        *self.debounce.borrow_mut() = Some(Timeout::new(self.debounce_ms, move || {
            state.debounce.borrow_mut().take();
            state.schedule_settle();
        }));
    }

    fn schedule_settle(self: &Rc<Self>) {
        let state = Rc::clone(self);
        *self.settle.borrow_mut() = Some(Timeout::new(self.settle_ms, move || {
            state.settle.borrow_mut().take();
            (state.on_settled)();
        }));
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    fn pending(&self) -> bool {
        self.debounce.borrow().is_some() || self.settle.borrow().is_some()
    }

    fn cancel(&self) {
        self.debounce.borrow_mut().take();
        self.settle.borrow_mut().take();
    }
}

/// Runs `on_settled` once a burst of window resizes has gone quiet.
pub(crate) struct ResizeCoordinator {
    state: Rc<ResizeState>,
    _listener: EventListener,
}

impl ResizeCoordinator {
    pub(crate) fn install(window: &Window, config: &ResizeConfig, on_settled: Rc<dyn Fn()>) -> Self {
        let state = Rc::new(ResizeState {
            debounce_ms: config.debounce_ms,
            settle_ms: config.settle_ms,
            debounce: RefCell::new(None),
            settle: RefCell::new(None),
            on_settled,
        });
        let listener_state = Rc::clone(&state);
        let listener = EventListener::new(window, "resize", move |_event: &Event| {
            listener_state.schedule();
        });
        Self {
            state,
            _listener: listener,
        }
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn notify_resize(&self) {
        self.state.schedule();
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn pending(&self) -> bool {
        self.state.pending()
    }
}

impl Drop for ResizeCoordinator {
    fn drop(&mut self) {
        self.state.cancel();
    }
}
