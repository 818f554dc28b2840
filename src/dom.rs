use gloo::console;
use splatpage_core::config::ComparisonConfig;
use splatpage_core::{MathMode, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, Window};

use crate::error::PageError;

pub(crate) struct MathElement {
    pub(crate) mode: MathMode,
    pub(crate) element: Element,
}

pub(crate) struct ComparisonHandles {
    pub(crate) marker: HtmlElement,
    pub(crate) overlay: HtmlElement,
    pub(crate) container: Element,
}

/// Every DOM handle the widgets need, gathered once at startup.
pub(crate) struct PageHandles {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) math: Vec<MathElement>,
    pub(crate) comparison: Option<ComparisonHandles>,
    pub(crate) canvas: Option<HtmlCanvasElement>,
}

impl PageHandles {
    pub(crate) fn collect(window: Window, document: Document, config: &PageConfig) -> Self {
        let math = math_elements(&document);
        let comparison = match comparison_handles(&document, &config.comparison) {
            Ok(handles) => handles,
            Err(err) => {
                console::warn!("comparison slider disabled", err.to_string());
                None
            }
        };
        let canvas = match optional_element::<HtmlCanvasElement>(&document, &config.orbit.canvas_id) {
            Ok(canvas) => canvas,
            Err(err) => {
                console::warn!("orbit viewer disabled", err.to_string());
                None
            }
        };
        Self {
            window,
            document,
            math,
            comparison,
            canvas,
        }
    }
}

fn math_elements(document: &Document) -> Vec<MathElement> {
    let mut elements = Vec::new();
    for mode in MathMode::ALL {
        let Ok(nodes) = document.query_selector_all(&format!(".{}", mode.class_name())) else {
            continue;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            elements.push(MathElement { mode, element });
        }
    }
    elements
}

fn comparison_handles(
    document: &Document,
    config: &ComparisonConfig,
) -> Result<Option<ComparisonHandles>, PageError> {
    let Some(root) = document.get_element_by_id(&config.root_id) else {
        return Ok(None);
    };
    let marker = required_element::<HtmlElement>(document, &config.marker_id)?;
    let overlay = required_element::<HtmlElement>(document, &config.overlay_id)?;
    let selector = format!(".{}", config.container_class);
    let container = root
        .query_selector(&selector)?
        .ok_or(PageError::MissingElement(selector))?;
    Ok(Some(ComparisonHandles {
        marker,
        overlay,
        container,
    }))
}

fn optional_element<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>, PageError> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    element
        .dyn_into::<T>()
        .map(Some)
        .map_err(|_| PageError::WrongElementType(id.to_string()))
}

fn required_element<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    optional_element(document, id)?.ok_or_else(|| PageError::MissingElement(id.to_string()))
}
