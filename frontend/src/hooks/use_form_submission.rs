use std::rc::Rc;

use shared::{Form, FormSpec, FormSubmitter, PageFields, SubmissionOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::page::{AlertNotifier, DomFields};
use crate::services::prompt::{DialogPrompts, PromptRequest};

/// Where a form's values come from
#[derive(Clone, PartialEq)]
pub enum Acquisition {
    /// Inputs on the page, cleared after an accepted submission
    Page,
    /// The prompt dialog, opened through the given callback
    Dialog {
        title: &'static str,
        open: Callback<Rc<PromptRequest>>,
    },
}

pub struct FormSubmission {
    pub onclick: Callback<MouseEvent>,
    /// True while a submission of this form is running
    pub submitting: bool,
}

/// Hook wiring a trigger button to the submit flow of one form
#[hook]
pub fn use_form_submission(spec: fn() -> FormSpec, acquisition: Acquisition) -> FormSubmission {
    let form = use_memo((), move |_| Form::new(spec()));
    let submitting = use_state(|| false);

    let onclick = {
        let form = form.clone();
        let submitting = submitting.clone();

        Callback::from(move |_: MouseEvent| {
            let form = form.clone();
            let submitting = submitting.clone();
            let acquisition = acquisition.clone();

            spawn_local(async move {
                submitting.set(true);

                let submitter = FormSubmitter::new(ApiClient::new(), AlertNotifier);
                let outcome = match acquisition {
                    Acquisition::Page => submitter.submit(&form, &PageFields::new(DomFields)).await,
                    Acquisition::Dialog { title, open } => {
                        submitter.submit(&form, &DialogPrompts::new(title, open)).await
                    }
                };

                // a turned-away activation must not re-enable the running one
                if outcome != SubmissionOutcome::Busy {
                    submitting.set(false);
                }
            });
        })
    };

    FormSubmission {
        onclick,
        submitting: *submitting,
    }
}
