//! # Form configuration
//!
//! A form is described once by a [`FormSpec`]: which fields it sends, where
//! it posts them and what the user sees on success. [`Form`] wraps a spec
//! with the per-form state that lives across activations, which is only the
//! in-flight flag.

use std::cell::Cell;

/// Shape check applied to a collected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be present and non-empty
    Required,
    /// Required, and must contain an `@`
    Email,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Property name in the JSON request body
    pub key: &'static str,
    /// Id of the page element holding the value
    pub element_id: &'static str,
    /// Text shown when the value is asked for in a dialog
    pub label: &'static str,
    /// Mask the value while it is typed
    pub secret: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    /// Required field whose page element id matches its key
    pub fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            element_id: key,
            label,
            secret: false,
            rule: FieldRule::Required,
        }
    }

    pub fn element(mut self, element_id: &'static str) -> Self {
        self.element_id = element_id;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.rule = FieldRule::Email;
        self
    }
}

/// What to show after the server accepted a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessMessage {
    /// Show the server's `message`
    EchoServer,
    /// Show a fixed confirmation and ignore the server's text
    Fixed(&'static str),
}

impl SuccessMessage {
    pub fn text<'a>(&'a self, server_message: &'a str) -> &'a str {
        match self {
            SuccessMessage::EchoServer => server_message,
            SuccessMessage::Fixed(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Short name used as the log target
    pub name: &'static str,
    /// Path the field mapping is POSTed to
    pub endpoint: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Shown when any field is absent or empty
    pub missing_message: &'static str,
    pub success: SuccessMessage,
}

/// A configured form plus its single-in-flight flag.
///
/// Activations of the same form never overlap: while one submission is
/// outstanding, further activations are turned away.
#[derive(Debug)]
pub struct Form {
    spec: FormSpec,
    in_flight: Cell<bool>,
}

impl Form {
    pub fn new(spec: FormSpec) -> Self {
        Self {
            spec,
            in_flight: Cell::new(false),
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Claim the form for one submission. Returns `None` if a submission is
    /// already running; the claim is released when the guard drops.
    pub(crate) fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlightGuard {
            flag: &self.in_flight,
        })
    }
}

pub(crate) struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
