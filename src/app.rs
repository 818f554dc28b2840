use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use splatpage_core::{PageConfig, TypesetReport};

use crate::config::load_page_config;
use crate::dom::PageHandles;
use crate::error::PageError;
use crate::math::{render_math, Katex, Typesetter};
use crate::resize::ResizeCoordinator;
use crate::slider::ComparisonSlider;
use crate::viewer::OrbitViewer;

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// The page's widgets. Each one is set up on its own; a widget that fails
/// to initialize is logged and left out without affecting the others.
pub(crate) struct App {
    pub(crate) math: TypesetReport,
    pub(crate) slider: Option<Rc<ComparisonSlider>>,
    pub(crate) viewer: Option<Rc<OrbitViewer>>,
    resize: Option<ResizeCoordinator>,
}

impl App {
    pub(crate) fn init(handles: PageHandles, config: &PageConfig, typesetter: &dyn Typesetter) -> Self {
        let math = render_math(&handles.math, typesetter);
        if math.failed > 0 {
            console::warn!("math typesetting incomplete", math.rendered, math.failed);
        }

        let slider = handles.comparison.and_then(|comparison| {
            match ComparisonSlider::init(comparison, &handles.document, &config.comparison) {
                Ok(slider) => Some(slider),
                Err(err) => {
                    console::warn!("comparison slider init failed", err.to_string());
                    None
                }
            }
        });

        let viewer = handles.canvas.and_then(|canvas| {
            match OrbitViewer::init(canvas, &handles.window, &handles.document, &config.orbit) {
                Ok(viewer) => Some(viewer),
                Err(err) => {
                    console::warn!("orbit viewer init failed", err.to_string());
                    None
                }
            }
        });

        let resize = slider.as_ref().map(|slider| {
            let slider = Rc::downgrade(slider);
            ResizeCoordinator::install(
                &handles.window,
                &config.resize,
                Rc::new(move || {
                    let Some(slider) = slider.upgrade() else {
                        return;
                    };
                    if let Err(err) = slider.reapply_layout() {
                        console::warn!("comparison slider relayout failed", err.to_string());
                    }
                }),
            )
        });

        Self {
            math,
            slider,
            viewer,
            resize,
        }
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn shutdown(self) {
        drop(self.resize);
        if let Some(slider) = self.slider {
            slider.teardown();
        }
        if let Some(viewer) = self.viewer {
            viewer.teardown();
        }
    }
}

/// Application entry point. Runs at most once per page.
pub(crate) fn start() -> Result<(), PageError> {
    if STARTED.with(|started| started.replace(true)) {
        return Ok(());
    }
    let window = web_sys::window().ok_or(PageError::Unavailable("window"))?;
    let document = window.document().ok_or(PageError::Unavailable("document"))?;
    let config = load_page_config(&document);
    let handles = PageHandles::collect(window, document, &config);
    let app = App::init(handles, &config, &Katex);
    console::log!(
        "page ready",
        app.math.rendered,
        app.slider.is_some(),
        app.viewer.is_some()
    );
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

pub(crate) fn launch() {
    if let Err(err) = start() {
        console::warn!("page init failed", err.to_string());
    }
}
