use gloo::console;
use splatpage_core::PageConfig;
use web_sys::Document;

pub(crate) const PAGE_CONFIG_ELEMENT_ID: &str = "page-config";

/// Reads the optional inline `<script type="application/json" id="page-config">`.
pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(PAGE_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    match PageConfig::from_json(&raw) {
        Ok(config) => {
            console::log!("page config loaded");
            config
        }
        Err(err) => {
            console::warn!("page config ignored", err.to_string());
            PageConfig::default()
        }
    }
}
