use gloo::console;
use js_sys::{Object, Reflect};
use splatpage_core::{typeset_each, MathMode, TypesetReport};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::MathElement;
use crate::error::PageError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = katex, js_name = render)]
    fn katex_render(source: &str, target: &Element, options: &JsValue) -> Result<(), JsValue>;
}

pub(crate) trait Typesetter {
    fn typeset(&self, source: &str, target: &Element, mode: MathMode) -> Result<(), PageError>;
}

/// The page's global `katex` object.
pub(crate) struct Katex;

impl Typesetter for Katex {
    fn typeset(&self, source: &str, target: &Element, mode: MathMode) -> Result<(), PageError> {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("throwOnError"), &JsValue::FALSE)?;
        Reflect::set(
            &options,
            &JsValue::from_str("displayMode"),
            &JsValue::from_bool(mode.display_mode()),
        )?;
        katex_render(source, target, &options)?;
        Ok(())
    }
}

/// Typesets every math element; a failing formula keeps its source text.
pub(crate) fn render_math(elements: &[MathElement], typesetter: &dyn Typesetter) -> TypesetReport {
    typeset_each(
        elements,
        |entry| {
            let source = entry.element.text_content().unwrap_or_default();
            typesetter.typeset(&source, &entry.element, entry.mode)
        },
        |entry, err| {
            console::warn!(
                "math typesetting failed",
                entry.mode.class_name(),
                err.to_string()
            );
        },
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct FailOn(&'static str);

    impl Typesetter for FailOn {
        fn typeset(&self, source: &str, target: &Element, mode: MathMode) -> Result<(), PageError> {
            if source == self.0 {
                return Err(PageError::Js("parse error".to_string()));
            }
            target.set_inner_html(&format!("<span class=\"typeset {}\">{source}</span>", mode.class_name()));
            Ok(())
        }
    }

    fn math_element(mode: MathMode, source: &str) -> MathElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("span").unwrap();
        element.set_class_name(mode.class_name());
        element.set_text_content(Some(source));
        MathElement { mode, element }
    }

    #[wasm_bindgen_test]
    fn failing_formula_leaves_siblings_rendered() {
        let elements = vec![
            math_element(MathMode::Inline, "x^2"),
            math_element(MathMode::Inline, "\\broken{"),
            math_element(MathMode::Block, "\\sum_i i"),
        ];
        let report = render_math(&elements, &FailOn("\\broken{"));
        assert_eq!(report, TypesetReport { rendered: 2, failed: 1 });
        assert!(elements[0].element.query_selector(".typeset").unwrap().is_some());
        assert!(elements[2].element.query_selector(".typeset.math-block").unwrap().is_some());
        assert_eq!(elements[1].element.inner_html(), "\\broken{");
    }
}
