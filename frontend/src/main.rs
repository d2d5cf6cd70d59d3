use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{ContactForm, NewsletterForm, PromptDialog, SignInButton};
use config::AppConfig;
use services::prompt::PromptRequest;

#[function_component(App)]
fn app() -> Html {
    // The sign-in dialog currently waiting for an answer
    let prompt = use_state(|| Option::<Rc<PromptRequest>>::None);

    let open_prompt = {
        let prompt = prompt.clone();
        Callback::from(move |request: Rc<PromptRequest>| {
            prompt.set(Some(request));
        })
    };

    let close_prompt = {
        let prompt = prompt.clone();
        Callback::from(move |_: ()| {
            prompt.set(None);
        })
    };

    html! {
        <div class="app">
            <header class="site-header">
                <h1>{"Welcome"}</h1>
                <SignInButton open_prompt={open_prompt} />
            </header>

            <main class="site-main">
                <ContactForm />
                <NewsletterForm />
            </main>

            {if let Some(request) = (*prompt).clone() {
                html! { <PromptDialog request={request} on_close={close_prompt} /> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    services::logging::init(config.log_level);
    info!(
        target: "app",
        "Starting site forms client (api base: '{}')",
        config.api_base_url
    );

    yew::Renderer::<App>::new().render();
}
