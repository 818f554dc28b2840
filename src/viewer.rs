use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use splatpage_core::config::OrbitConfig;
use splatpage_core::{splat_layout, DragSession, DragStep, OrbitKey, Rect, RotationState};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, Window};

use crate::drag::{install_drag_listeners, DragHandler};
use crate::error::PageError;
use crate::input::{client_rect, key_from_event};

pub(crate) struct OrbitViewer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    config: OrbitConfig,
    rotation: Cell<RotationState>,
    session: RefCell<DragSession>,
    frame: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
    frames_drawn: Cell<u64>,
    listeners: RefCell<Vec<EventListener>>,
}

impl OrbitViewer {
    pub(crate) fn init(
        canvas: HtmlCanvasElement,
        window: &Window,
        document: &Document,
        config: &OrbitConfig,
    ) -> Result<Rc<Self>, PageError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(PageError::Unavailable("2d canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::WrongElementType(canvas.id()))?;
        canvas.set_attribute("tabindex", "0")?;
        let viewer = Rc::new(Self {
            canvas,
            context,
            config: config.clone(),
            rotation: Cell::new(RotationState::default()),
            session: RefCell::new(DragSession::new()),
            frame: RefCell::new(None),
            running: Cell::new(false),
            frames_drawn: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        });
        viewer.sync_canvas_size();
        viewer.install_listeners(window, document);
        viewer.start();
        Ok(viewer)
    }

    /// Returns whether the key was consumed.
    pub(crate) fn handle_key(&self, key: &str) -> bool {
        let Some(key) = OrbitKey::from_key(key) else {
            return false;
        };
        let mut rotation = self.rotation.get();
        rotation.apply_key(key, self.config.key_step);
        self.rotation.set(rotation);
        true
    }

    pub(crate) fn start(self: &Rc<Self>) {
        if self.running.replace(true) {
            return;
        }
        self.frame_tick();
    }

    /// Cancels the pending frame; no further frames are scheduled.
    pub(crate) fn stop(&self) {
        self.running.set(false);
        self.frame.borrow_mut().take();
    }

    fn sync_canvas_size(&self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width(rect.width() as u32);
        self.canvas.set_height(rect.height() as u32);
    }

    fn frame_tick(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        if !self.running.get() {
            return;
        }
        if let Err(err) = self.draw() {
            console::warn!("orbit viewer draw failed", err.to_string());
        }
        self.frames_drawn.set(self.frames_drawn.get() + 1);
        let viewer = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            viewer.frame_tick();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn draw(&self) -> Result<(), PageError> {
        let ctx = &self.context;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        ctx.set_fill_style_str(&self.config.background);
        ctx.fill_rect(0.0, 0.0, width, height);

        for splat in splat_layout(self.rotation.get(), width, height, self.config.splat_count) {
            let gradient =
                ctx.create_radial_gradient(splat.x, splat.y, 0.0, splat.x, splat.y, splat.size)?;
            gradient.add_color_stop(0.0, &splat.fill_color())?;
            gradient.add_color_stop(1.0, "transparent")?;
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            ctx.arc(splat.x, splat.y, splat.size, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }

    fn install_listeners(self: &Rc<Self>, window: &Window, document: &Document) {
        let mut listeners = install_drag_listeners(&self.canvas, document, self);

        let viewer = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.canvas,
            "keydown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(key) = key_from_event(event) else {
                    return;
                };
                if viewer.handle_key(&key) {
                    event.prevent_default();
                }
            },
        );
        listeners.push(listener);

        let viewer = Rc::clone(self);
        let listener = EventListener::new(window, "resize", move |_event: &Event| {
            viewer.sync_canvas_size();
        });
        listeners.push(listener);

        let viewer = Rc::clone(self);
        let listener = EventListener::new(window, "beforeunload", move |_event: &Event| {
            viewer.stop();
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
impl OrbitViewer {
    pub(crate) fn rotation(&self) -> RotationState {
        self.rotation.get()
    }

    pub(crate) fn frames_drawn(&self) -> u64 {
        self.frames_drawn.get()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.get()
    }

    pub(crate) fn teardown(&self) {
        self.stop();
        self.listeners.borrow_mut().clear();
        self.session.borrow_mut().end();
    }
}

impl DragHandler for OrbitViewer {
    fn session(&self) -> &RefCell<DragSession> {
        &self.session
    }

    fn press_origin(&self) -> Option<Rect> {
        Some(client_rect(&self.canvas))
    }

    fn on_drag(&self, step: DragStep, event: &Event) {
        let mut rotation = self.rotation.get();
        rotation.apply_drag(step.delta, self.config.drag_sensitivity);
        self.rotation.set(rotation);
        event.prevent_default();
    }
}
