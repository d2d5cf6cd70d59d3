use shared::forms;
use yew::prelude::*;

use crate::hooks::{use_form_submission, Acquisition};

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let submission = use_form_submission(forms::newsletter, Acquisition::Page);

    html! {
        <section class="newsletter-section">
            <h2>{"Newsletter"}</h2>
            <div class="newsletter-row">
                <input type="email" id="newsletter-email" placeholder="Your email address" />
                <button
                    type="button"
                    id="newsletterBtn"
                    class="btn btn-secondary"
                    onclick={submission.onclick}
                    disabled={submission.submitting}
                >
                    {"Subscribe"}
                </button>
            </div>
        </section>
    }
}
