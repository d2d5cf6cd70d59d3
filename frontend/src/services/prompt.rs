//! Asynchronous replacement for `window.prompt`.
//!
//! [`DialogPrompts`] asks the app to show a [`PromptRequest`] in an in-page
//! dialog and waits for the answer without blocking the event loop. The
//! dialog answers through the request; dropping the request unanswered
//! counts as a cancel.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use shared::{FieldSource, FieldSpec};
use yew::Callback;

type Answer = Option<Vec<String>>;

pub struct PromptRequest {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    responder: RefCell<Option<oneshot::Sender<Answer>>>,
}

impl PromptRequest {
    pub fn new(
        title: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> (Self, oneshot::Receiver<Answer>) {
        let (tx, rx) = oneshot::channel();
        let request = Self {
            title: title.into(),
            fields,
            responder: RefCell::new(Some(tx)),
        };
        (request, rx)
    }

    /// Answer with one value per field. Only the first answer counts.
    pub fn respond(&self, values: Vec<String>) {
        self.send(Some(values));
    }

    pub fn cancel(&self) {
        self.send(None);
    }

    fn send(&self, answer: Answer) {
        if let Some(tx) = self.responder.borrow_mut().take() {
            // receiver gone means the submission was abandoned
            let _ = tx.send(answer);
        }
    }
}

impl PartialEq for PromptRequest {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Field source that collects values through the app's prompt dialog
#[derive(Clone)]
pub struct DialogPrompts {
    title: String,
    open: Callback<Rc<PromptRequest>>,
}

impl DialogPrompts {
    pub fn new(title: impl Into<String>, open: Callback<Rc<PromptRequest>>) -> Self {
        Self {
            title: title.into(),
            open,
        }
    }
}

#[async_trait(?Send)]
impl FieldSource for DialogPrompts {
    async fn collect(&self, fields: &[FieldSpec]) -> Vec<Option<String>> {
        let (request, answer) = PromptRequest::new(self.title.clone(), fields.to_vec());
        self.open.emit(Rc::new(request));

        match answer.await {
            Ok(Some(values)) => values.into_iter().map(Some).collect(),
            Ok(None) | Err(_) => vec![None; fields.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::forms;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_confirmed_dialog_yields_values() {
        let open = Callback::from(|request: Rc<PromptRequest>| {
            assert_eq!(request.fields.len(), 2);
            request.respond(vec!["alice".to_string(), "secret".to_string()]);
        });
        let prompts = DialogPrompts::new("Sign in", open);

        let values = prompts.collect(&forms::sign_in().fields).await;
        assert_eq!(
            values,
            vec![Some("alice".to_string()), Some("secret".to_string())]
        );
    }

    #[wasm_bindgen_test]
    async fn test_cancelled_or_dropped_dialog_yields_absent_values() {
        let cancel = Callback::from(|request: Rc<PromptRequest>| request.cancel());
        let values = DialogPrompts::new("Sign in", cancel)
            .collect(&forms::sign_in().fields)
            .await;
        assert_eq!(values, vec![None, None]);

        let drop_it = Callback::from(|_request: Rc<PromptRequest>| {});
        let values = DialogPrompts::new("Sign in", drop_it)
            .collect(&forms::sign_in().fields)
            .await;
        assert_eq!(values, vec![None, None]);
    }

    #[wasm_bindgen_test]
    fn test_only_first_answer_counts() {
        let (request, mut answer) = PromptRequest::new("Sign in", forms::sign_in().fields);

        request.respond(vec!["alice".to_string()]);
        request.cancel();

        assert_eq!(answer.try_recv().unwrap(), Some(Some(vec!["alice".to_string()])));
    }
}
