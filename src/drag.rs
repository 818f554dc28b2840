use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use splatpage_core::{DragSession, DragStep, Rect};
use web_sys::{Event, EventTarget};

use crate::input::pointer_from_event;

const PRESS_EVENTS: [&str; 2] = ["mousedown", "touchstart"];
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// A widget that can be dragged with mouse or touch.
pub(crate) trait DragHandler {
    fn session(&self) -> &RefCell<DragSession>;

    /// Reference frame recorded when a drag starts.
    fn press_origin(&self) -> Option<Rect>;

    fn on_drag(&self, step: DragStep, event: &Event);
}

/// Presses are taken on `surface`; moves and releases on `document` so a drag
/// keeps tracking after the pointer leaves the widget.
pub(crate) fn install_drag_listeners<H: DragHandler + 'static>(
    surface: &EventTarget,
    document: &EventTarget,
    handler: &Rc<H>,
) -> Vec<EventListener> {
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };
    let mut listeners = Vec::new();

    for name in PRESS_EVENTS {
        let handler = Rc::clone(handler);
        let listener = EventListener::new_with_options(surface, name, options, move |event: &Event| {
            let Some(pointer) = pointer_from_event(event) else {
                return;
            };
            let origin = handler.press_origin();
            handler.session().borrow_mut().begin(pointer, origin);
            event.prevent_default();
        });
        listeners.push(listener);
    }

    for name in MOVE_EVENTS {
        let handler = Rc::clone(handler);
        let listener = EventListener::new_with_options(document, name, options, move |event: &Event| {
            let Some(pointer) = pointer_from_event(event) else {
                return;
            };
            let step = handler.session().borrow_mut().drag_to(pointer);
            if let Some(step) = step {
                handler.on_drag(step, event);
            }
        });
        listeners.push(listener);
    }

    for name in RELEASE_EVENTS {
        let handler = Rc::clone(handler);
        let listener = EventListener::new_with_options(document, name, options, move |_event: &Event| {
            handler.session().borrow_mut().end();
        });
        listeners.push(listener);
    }

    listeners
}
