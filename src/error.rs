use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub(crate) enum PageError {
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("element `{0}` has an unexpected type")]
    WrongElementType(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        PageError::Js(message)
    }
}
