use shared::forms;
use yew::prelude::*;

use crate::hooks::{use_form_submission, Acquisition};

/// Contact section. The inputs are left uncontrolled; the submit flow reads
/// and clears them by id.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let submission = use_form_submission(forms::contact, Acquisition::Page);

    html! {
        <section class="contact-section">
            <h2>{"Contact Us"}</h2>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input type="text" id="name" placeholder="Your name" />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input type="email" id="email" placeholder="you@example.com" />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="5" placeholder="How can we help?"></textarea>
            </div>
            <button
                type="button"
                id="contactBtn"
                class="btn btn-primary"
                onclick={submission.onclick}
                disabled={submission.submitting}
            >
                {if submission.submitting { "Sending..." } else { "Send Message" }}
            </button>
        </section>
    }
}
