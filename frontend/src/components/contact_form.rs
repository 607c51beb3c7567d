use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    /// Mirrors the `required` attributes, for browsers that skip native
    /// validation.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Message,
}

/// Contact form without a backend. Submitting only pretends to send.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_data = use_state(ContactFormData::default);
    let is_submitting = use_state(|| false);
    let show_feedback = use_state(|| false);

    let on_input = |field: Field| {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut data = (*form_data).clone();
            match field {
                Field::Name => data.name = value,
                Field::Email => data.email = value,
                Field::Message => data.message = value,
            }
            form_data.set(data);
        })
    };

    let on_submit = {
        let form_data = form_data.clone();
        let is_submitting = is_submitting.clone();
        let show_feedback = show_feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting || !form_data.is_complete() {
                return;
            }
            is_submitting.set(true);

            let form_data = form_data.clone();
            let is_submitting = is_submitting.clone();
            let show_feedback = show_feedback.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                info!("Contact form submitted (simulated)");
                show_feedback.set(true);
                form_data.set(ContactFormData::default());
                is_submitting.set(false);

                TimeoutFuture::new(config::CONTACT_FEEDBACK_MS).await;
                show_feedback.set(false);
            });
        })
    };

    html! {
        <div class="contact-form-container">
            <form id="contact-form" class="contact-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Name:"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        value={form_data.name.clone()}
                        oninput={on_input(Field::Name)}
                        required=true
                        disabled={*is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="email">{"E-Mail:"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={form_data.email.clone()}
                        oninput={on_input(Field::Email)}
                        required=true
                        disabled={*is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="message">{"Nachricht:"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        value={form_data.message.clone()}
                        oninput={on_input(Field::Message)}
                        required=true
                        disabled={*is_submitting}
                    />
                </div>
                <button type="submit" class="btn primary" disabled={*is_submitting}>
                    { if *is_submitting { "Wird gesendet..." } else { "Absenden" } }
                </button>
                {
                    if *show_feedback {
                        html! {
                            <p id="form-feedback" class="form-feedback">
                                {"Danke für Ihre Nachricht! Wir werden uns bald bei Ihnen melden."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
