//! Bindings from the submit flow to the live page

use log::{info, warn};
use shared::{FieldStore, Notice, NoticeKind, Notifier};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

/// Reads and writes `<input>` and `<textarea>` values by element id
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFields;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn find(element_id: &str) -> Option<Element> {
    let element = document()?.get_element_by_id(element_id);
    if element.is_none() {
        warn!(target: "page", "No element with id '{}'", element_id);
    }
    element
}

impl FieldStore for DomFields {
    fn get(&self, element_id: &str) -> Option<String> {
        let element = find(element_id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        warn!(target: "page", "Element '{}' is not a text field", element_id);
        None
    }

    fn set(&self, element_id: &str, value: &str) {
        let Some(element) = find(element_id) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            warn!(target: "page", "Element '{}' is not a text field", element_id);
        }
    }
}

/// Shows notices with the browser's alert dialog and mirrors them to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => info!(target: "page", "Showing: {}", notice.text),
            NoticeKind::Failure => warn!(target: "page", "Showing failure: {}", notice.text),
        }
        gloo::dialogs::alert(&notice.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(tag: &str, id: &str) -> Element {
        let document = document().unwrap();
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_reads_and_clears_input() {
        let element = mount("input", "test-input-email");
        element
            .dyn_ref::<HtmlInputElement>()
            .unwrap()
            .set_value("ann@example.com");

        assert_eq!(DomFields.get("test-input-email").as_deref(), Some("ann@example.com"));
        DomFields.set("test-input-email", "");
        assert_eq!(DomFields.get("test-input-email").as_deref(), Some(""));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_reads_textarea() {
        let element = mount("textarea", "test-textarea-message");
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .unwrap()
            .set_value("Hello there");

        assert_eq!(DomFields.get("test-textarea-message").as_deref(), Some("Hello there"));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_or_non_text_element_reads_as_absent() {
        assert_eq!(DomFields.get("test-does-not-exist"), None);

        let element = mount("div", "test-plain-div");
        assert_eq!(DomFields.get("test-plain-div"), None);
        element.remove();
    }
}
