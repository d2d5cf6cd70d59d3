//! # Form submission
//!
//! [`FormSubmitter`] runs one activation of a form: collect the field values,
//! validate them, POST them as JSON and tell the user what happened. The page,
//! the network and the user-facing dialogs are reached only through the
//! traits in this module, so the same flow serves every form and runs in
//! tests without a browser.

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::form::{FieldSpec, Form, FormSpec, SuccessMessage};
use crate::validation::{validate, ValidationError};
use crate::{FieldMapping, SubmissionResponse};

/// Named get/set access to the inputs on a page
pub trait FieldStore {
    fn get(&self, element_id: &str) -> Option<String>;
    fn set(&self, element_id: &str, value: &str);
}

impl<S: FieldStore + ?Sized> FieldStore for &S {
    fn get(&self, element_id: &str) -> Option<String> {
        (**self).get(element_id)
    }

    fn set(&self, element_id: &str, value: &str) {
        (**self).set(element_id, value)
    }
}

/// Strategy for acquiring a form's values
#[async_trait(?Send)]
pub trait FieldSource {
    /// One entry per field, in field order. `None` means the user gave no value.
    async fn collect(&self, fields: &[FieldSpec]) -> Vec<Option<String>>;

    /// Reset the fields after an accepted submission. Sources without a
    /// persistent element have nothing to clear.
    fn clear(&self, _fields: &[FieldSpec]) {}
}

/// Field source that reads from and clears page inputs through a [`FieldStore`]
pub struct PageFields<S> {
    store: S,
}

impl<S: FieldStore> PageFields<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait(?Send)]
impl<S: FieldStore> FieldSource for PageFields<S> {
    async fn collect(&self, fields: &[FieldSpec]) -> Vec<Option<String>> {
        fields
            .iter()
            .map(|field| self.store.get(field.element_id))
            .collect()
    }

    fn clear(&self, fields: &[FieldSpec]) {
        for field in fields {
            self.store.set(field.element_id, "");
        }
    }
}

/// Failure to obtain a well-formed response from an endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request could not be sent or completed
    #[error("{0}")]
    Transport(String),
    /// The body was not JSON, or carried neither `message` nor `error`
    #[error("{0}")]
    MalformedResponse(String),
    /// The field mapping could not be encoded
    #[error("{0}")]
    Serialize(String),
}

/// Sends a field mapping to an endpoint and parses the JSON reply
#[async_trait(?Send)]
pub trait SubmitTransport {
    /// The body is parsed whatever the HTTP status; servers report
    /// rejections as `{"error": ...}` with a 4xx status.
    async fn post_json(
        &self,
        path: &str,
        body: &FieldMapping,
    ) -> Result<SubmissionResponse, RequestError>;
}

#[async_trait(?Send)]
impl<T: SubmitTransport + ?Sized> SubmitTransport for &T {
    async fn post_json(
        &self,
        path: &str,
        body: &FieldMapping,
    ) -> Result<SubmissionResponse, RequestError> {
        (**self).post_json(path, body).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }
}

/// Shows notices to the user
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

/// Result of one activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Another submission of the same form was still running; nothing was done
    Busy,
    /// Input was rejected locally; no request was made
    Invalid(ValidationError),
    /// Server accepted the submission; holds the text shown to the user
    Sent(String),
    /// Server answered with an `error`
    Rejected(String),
    Failed(RequestError),
}

impl SubmissionOutcome {
    /// The notice this outcome shows, if any
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmissionOutcome::Busy => None,
            SubmissionOutcome::Invalid(err) => Some(Notice::failure(err.to_string())),
            SubmissionOutcome::Sent(text) => Some(Notice::success(text.clone())),
            SubmissionOutcome::Rejected(err) => Some(Notice::failure(format!("Error: {}", err))),
            SubmissionOutcome::Failed(err) => {
                Some(Notice::failure(format!("Connection error: {}", err)))
            }
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent(_))
    }
}

/// Runs the submit flow for any form against one transport and notifier
pub struct FormSubmitter<T, N> {
    transport: T,
    notifier: N,
}

impl<T: SubmitTransport, N: Notifier> FormSubmitter<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Run one activation of `form`, taking its values from `source`.
    ///
    /// Makes at most one request. Fields are cleared only after the server
    /// accepted the submission and the user has been told.
    pub async fn submit(&self, form: &Form, source: &dyn FieldSource) -> SubmissionOutcome {
        let Some(_guard) = form.try_begin() else {
            debug!(target: form.name(), "Submission already in flight, ignoring activation");
            return SubmissionOutcome::Busy;
        };

        let spec = form.spec();
        let outcome = self.run(spec, source).await;

        if let Some(notice) = outcome.notice() {
            self.notifier.notify(&notice);
        }
        if outcome.is_sent() {
            source.clear(&spec.fields);
        }

        outcome
    }

    async fn run(&self, spec: &FormSpec, source: &dyn FieldSource) -> SubmissionOutcome {
        let values = source.collect(&spec.fields).await;

        let mapping = match validate(spec, &values) {
            Ok(mapping) => mapping,
            Err(err) => {
                warn!(target: spec.name, "Validation failed on '{}': {}", err.field(), err);
                return SubmissionOutcome::Invalid(err);
            }
        };

        debug!(target: spec.name, "Posting {} field(s) to {}", mapping.len(), spec.endpoint);

        match self.transport.post_json(spec.endpoint, &mapping).await {
            Ok(response) => Self::interpret(spec, response),
            Err(err) => {
                error!(target: spec.name, "Request to {} failed: {}", spec.endpoint, err);
                SubmissionOutcome::Failed(err)
            }
        }
    }

    fn interpret(spec: &FormSpec, response: SubmissionResponse) -> SubmissionOutcome {
        // `error` wins when a server sends both keys
        if let Some(err) = response.error {
            warn!(target: spec.name, "{} rejected submission: {}", spec.endpoint, err);
            return SubmissionOutcome::Rejected(err);
        }

        let text = match (response.message, spec.success) {
            (Some(message), success) => success.text(&message).to_string(),
            // a form that ignores the server's text only needs the absence of `error`
            (None, SuccessMessage::Fixed(text)) => text.to_string(),
            (None, SuccessMessage::EchoServer) => {
                let err = RequestError::MalformedResponse(
                    "response contained neither message nor error".to_string(),
                );
                error!(target: spec.name, "Unexpected reply from {}: {}", spec.endpoint, err);
                return SubmissionOutcome::Failed(err);
            }
        };

        info!(target: spec.name, "{} accepted submission", spec.endpoint);
        SubmissionOutcome::Sent(text)
    }
}
