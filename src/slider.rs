use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use splatpage_core::config::ComparisonConfig;
use splatpage_core::{DragSession, DragStep, Rect, SliderKey, SliderPosition};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Node};

use crate::dom::ComparisonHandles;
use crate::drag::{install_drag_listeners, DragHandler};
use crate::error::PageError;
use crate::input::{client_rect, key_from_event};

const ARIA_LABEL: &str = "Image comparison slider";

/// Before/after slider: the marker offset and the overlay clip both follow
/// one stored percentage.
pub(crate) struct ComparisonSlider {
    marker: HtmlElement,
    overlay: HtmlElement,
    container: Element,
    key_step: f64,
    position: Cell<SliderPosition>,
    session: RefCell<DragSession>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ComparisonSlider {
    pub(crate) fn init(
        handles: ComparisonHandles,
        document: &Document,
        config: &ComparisonConfig,
    ) -> Result<Rc<Self>, PageError> {
        let slider = Rc::new(Self {
            marker: handles.marker,
            overlay: handles.overlay,
            container: handles.container,
            key_step: config.key_step,
            position: Cell::new(SliderPosition::new(config.initial_position)),
            session: RefCell::new(DragSession::new()),
            listeners: RefCell::new(Vec::new()),
        });
        slider.install_accessibility()?;
        slider.set_position(slider.position())?;
        slider.install_listeners(document);
        Ok(slider)
    }

    pub(crate) fn position(&self) -> SliderPosition {
        self.position.get()
    }

    pub(crate) fn set_position(&self, position: SliderPosition) -> Result<(), PageError> {
        self.position.set(position);
        self.render_layout(position)?;
        self.marker
            .set_attribute("aria-valuenow", &position.aria_value().to_string())?;
        Ok(())
    }

    /// Re-renders the stored percentage after a layout change without
    /// deriving a new value from pixels.
    pub(crate) fn reapply_layout(&self) -> Result<(), PageError> {
        self.render_layout(self.position())
    }

    pub(crate) fn seek_to(&self, client_x: f64) -> Result<(), PageError> {
        let rect = client_rect(&self.container);
        if let Some(position) = SliderPosition::from_pointer(client_x, rect) {
            self.set_position(position)?;
        }
        Ok(())
    }

    /// Returns whether the key was consumed.
    pub(crate) fn handle_key(&self, key: &str) -> Result<bool, PageError> {
        let Some(key) = SliderKey::from_key(key) else {
            return Ok(false);
        };
        self.set_position(self.position().apply_key(key, self.key_step))?;
        Ok(true)
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.session.borrow_mut().end();
    }

    fn render_layout(&self, position: SliderPosition) -> Result<(), PageError> {
        self.marker
            .style()
            .set_property("left", &position.marker_left())?;
        self.overlay
            .style()
            .set_property("clip-path", &position.clip_path())?;
        Ok(())
    }

    fn install_accessibility(&self) -> Result<(), PageError> {
        let marker = &self.marker;
        marker.set_attribute("tabindex", "0")?;
        marker.set_attribute("role", "slider")?;
        marker.set_attribute("aria-valuemin", "0")?;
        marker.set_attribute("aria-valuemax", "100")?;
        marker.set_attribute("aria-valuenow", &self.position().aria_value().to_string())?;
        marker.set_attribute("aria-label", ARIA_LABEL)?;
        Ok(())
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = install_drag_listeners(&self.marker, document, self);
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };

        let slider = Rc::clone(self);
        let listener = EventListener::new(&self.container, "click", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            if target.is_some() && slider.marker.contains(target.as_ref()) {
                return;
            }
            report(slider.seek_to(event.client_x() as f64));
        });
        listeners.push(listener);

        let slider = Rc::clone(self);
        let listener =
            EventListener::new_with_options(&self.marker, "keydown", options, move |event: &Event| {
                let Some(key) = key_from_event(event) else {
                    return;
                };
                match slider.handle_key(&key) {
                    Ok(true) => event.prevent_default(),
                    Ok(false) => {}
                    Err(err) => console::warn!("comparison slider update failed", err.to_string()),
                }
            });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }
}

impl DragHandler for ComparisonSlider {
    fn session(&self) -> &RefCell<DragSession> {
        &self.session
    }

    fn press_origin(&self) -> Option<Rect> {
        Some(client_rect(&self.container))
    }

    fn on_drag(&self, step: DragStep, _event: &Event) {
        let Some(origin) = step.origin else {
            return;
        };
        if let Some(position) = SliderPosition::from_pointer(step.pointer.x, origin) {
            report(self.set_position(position));
        }
    }
}

fn report(result: Result<(), PageError>) {
    if let Err(err) = result {
        console::warn!("comparison slider update failed", err.to_string());
    }
}
