use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::prompt::PromptRequest;

#[derive(Properties, PartialEq)]
pub struct PromptDialogProps {
    pub request: Rc<PromptRequest>,
    pub on_close: Callback<()>,
}

/// In-page dialog asking for the fields of a [`PromptRequest`]
#[function_component(PromptDialog)]
pub fn prompt_dialog(props: &PromptDialogProps) -> Html {
    let values = use_state(|| vec![String::new(); props.request.fields.len()]);

    let on_confirm = {
        let values = values.clone();
        let request = props.request.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            request.respond((*values).clone());
            on_close.emit(());
        })
    };

    let on_cancel = {
        let request = props.request.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            request.cancel();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let inputs = props.request.fields.iter().enumerate().map(|(index, field)| {
        let input_id = format!("prompt-{}", field.key);
        let oninput = {
            let values = values.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*values).clone();
                if let Some(slot) = next.get_mut(index) {
                    *slot = input.value();
                }
                values.set(next);
            })
        };

        html! {
            <div class="form-group">
                <label for={input_id.clone()}>{field.label}</label>
                <input
                    id={input_id}
                    type={if field.secret { "password" } else { "text" }}
                    value={values.get(index).cloned().unwrap_or_default()}
                    oninput={oninput}
                    autofocus={index == 0}
                />
            </div>
        }
    });

    html! {
        <div class="prompt-modal-backdrop" onclick={on_cancel.clone()}>
            <div class="prompt-modal" onclick={on_modal_click}>
                <h3 class="prompt-title">{props.request.title.clone()}</h3>
                <form class="prompt-form" onsubmit={on_confirm}>
                    {for inputs}
                    <div class="prompt-buttons">
                        <button type="submit" class="btn btn-primary">{"OK"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
