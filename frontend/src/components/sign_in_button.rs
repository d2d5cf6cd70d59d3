use std::rc::Rc;

use shared::forms;
use yew::prelude::*;

use crate::hooks::{use_form_submission, Acquisition};
use crate::services::prompt::PromptRequest;

#[derive(Properties, PartialEq)]
pub struct SignInButtonProps {
    /// Shows the prompt dialog for a request
    pub open_prompt: Callback<Rc<PromptRequest>>,
}

#[function_component(SignInButton)]
pub fn sign_in_button(props: &SignInButtonProps) -> Html {
    let submission = use_form_submission(
        forms::sign_in,
        Acquisition::Dialog {
            title: "Sign in",
            open: props.open_prompt.clone(),
        },
    );

    html! {
        <button
            id="signInBtn"
            class="btn btn-primary"
            onclick={submission.onclick}
            disabled={submission.submitting}
        >
            {if submission.submitting { "Signing in..." } else { "Sign In" }}
        </button>
    }
}
