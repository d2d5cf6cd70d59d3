//! In-memory stand-ins for the page, the network and the user

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::form::FieldSpec;
use crate::submission::{FieldSource, FieldStore, Notice, Notifier, RequestError, SubmitTransport};
use crate::{FieldMapping, SubmissionResponse};

/// Page inputs keyed by element id; counts every write
#[derive(Default)]
pub struct MemoryFields {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryFields {
    pub fn with(values: &[(&str, &str)]) -> Self {
        let fields = Self::default();
        fields.values.borrow_mut().extend(
            values
                .iter()
                .map(|(id, value)| (id.to_string(), value.to_string())),
        );
        fields
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl FieldStore for MemoryFields {
    fn get(&self, element_id: &str) -> Option<String> {
        self.values.borrow().get(element_id).cloned()
    }

    fn set(&self, element_id: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.values
            .borrow_mut()
            .insert(element_id.to_string(), value.to_string());
    }
}

/// Dialog answers given up front; `None` for a cancelled dialog
pub struct ScriptedPrompts {
    answers: Option<Vec<String>>,
}

impl ScriptedPrompts {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Some(answers.iter().map(|a| a.to_string()).collect()),
        }
    }

    pub fn cancelled() -> Self {
        Self { answers: None }
    }
}

#[async_trait(?Send)]
impl FieldSource for ScriptedPrompts {
    async fn collect(&self, fields: &[FieldSpec]) -> Vec<Option<String>> {
        (0..fields.len())
            .map(|i| self.answers.as_ref().and_then(|a| a.get(i).cloned()))
            .collect()
    }
}

/// Records `(path, body)` for every request and answers from a script.
/// Replies are raw `(status, body)` pairs parsed the way the browser client
/// parses them.
pub struct ScriptedTransport {
    reply: Result<(u16, String), RequestError>,
    requests: RefCell<Vec<(String, String)>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedTransport {
    pub fn replying(response: SubmissionResponse) -> Self {
        let body = serde_json::to_string(&response).unwrap();
        Self::answering(200, &body)
    }

    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            reply: Ok((status, body.to_string())),
            requests: RefCell::new(Vec::new()),
            gate: RefCell::new(None),
        }
    }

    pub fn failing(err: RequestError) -> Self {
        Self {
            reply: Err(err),
            ..Self::answering(200, "{}")
        }
    }

    /// Like `replying`, but the first request does not complete until the
    /// returned sender fires
    pub fn held(response: SubmissionResponse) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let transport = Self::replying(response);
        *transport.gate.borrow_mut() = Some(rx);
        (transport, tx)
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SubmitTransport for ScriptedTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &FieldMapping,
    ) -> Result<SubmissionResponse, RequestError> {
        let body =
            serde_json::to_string(body).map_err(|e| RequestError::Serialize(e.to_string()))?;
        self.requests.borrow_mut().push((path.to_string(), body));

        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let (status, body) = self.reply.clone()?;
        SubmissionResponse::from_reply(status, &body)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
