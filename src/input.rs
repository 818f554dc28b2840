use splatpage_core::{Point, Rect};
use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlCanvasElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn client_rect(element: &impl HasClientRect) -> Rect {
    let rect = element.client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Client coordinates of a mouse event, or of the first active touch.
pub(crate) fn pointer_from_event(event: &Event) -> Option<Point> {
    if let Some(event) = event.dyn_ref::<TouchEvent>() {
        let touch = event.touches().get(0)?;
        return Some(Point::new(touch.client_x() as f64, touch.client_y() as f64));
    }
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(event.client_x() as f64, event.client_y() as f64))
}

pub(crate) fn key_from_event(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Synthetic pointer events for browser tests.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod fixtures {
    use js_sys::{Array, Reflect};
    use wasm_bindgen::JsValue;
    use web_sys::{EventTarget, MouseEvent, MouseEventInit, Touch, TouchEvent, TouchEventInit, TouchInit};

    pub(crate) fn mouse_event(kind: &str, x: i32, y: i32) -> MouseEvent {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x);
        init.set_client_y(y);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
    }

    pub(crate) fn dispatch_mouse(target: &EventTarget, kind: &str, x: i32, y: i32) {
        target.dispatch_event(&mouse_event(kind, x, y)).unwrap();
    }

    /// `None` when the browser has no touch event constructors.
    pub(crate) fn touch_event(kind: &str, target: &EventTarget, points: &[(f64, f64)]) -> Option<TouchEvent> {
        let window = web_sys::window().unwrap();
        let supported = Reflect::has(&window, &JsValue::from_str("Touch")).unwrap()
            && Reflect::has(&window, &JsValue::from_str("TouchEvent")).unwrap();
        if !supported {
            return None;
        }
        let touches = Array::new();
        for (id, (x, y)) in points.iter().enumerate() {
            let init = TouchInit::new(id as i32, target);
            Reflect::set(&init, &JsValue::from_str("clientX"), &JsValue::from_f64(*x)).unwrap();
            Reflect::set(&init, &JsValue::from_str("clientY"), &JsValue::from_f64(*y)).unwrap();
            touches.push(&Touch::new(&init).ok()?);
        }
        let init = TouchEventInit::new();
        Reflect::set(&init, &JsValue::from_str("bubbles"), &JsValue::TRUE).unwrap();
        Reflect::set(&init, &JsValue::from_str("cancelable"), &JsValue::TRUE).unwrap();
        Reflect::set(&init, &JsValue::from_str("touches"), &touches).unwrap();
        TouchEvent::new_with_event_init_dict(kind, &init).ok()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::fixtures::{mouse_event, touch_event};
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mouse_pointer_uses_client_coordinates() {
        let event = mouse_event("mousemove", 12, 34);
        assert_eq!(pointer_from_event(&event), Some(Point::new(12.0, 34.0)));
    }

    #[wasm_bindgen_test]
    fn touch_pointer_uses_first_touch() {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(event) = touch_event("touchmove", &document, &[(40.0, 5.0), (300.0, 90.0)]) else {
            return;
        };
        assert_eq!(pointer_from_event(&event), Some(Point::new(40.0, 5.0)));
        let empty = touch_event("touchend", &document, &[]).unwrap();
        assert_eq!(pointer_from_event(&empty), None);
    }

    #[wasm_bindgen_test]
    fn plain_event_has_no_pointer() {
        let event = Event::new("resize").unwrap();
        assert_eq!(pointer_from_event(&event), None);
        assert_eq!(key_from_event(&event), None);
    }
}
