use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::validation::{
    email_feedback, error_report, name_feedback, phone_feedback, ContactFields, FieldFeedback,
};
use crate::config;

const SERVICES: [(&str, &str); 6] = [
    ("", "Select a service"),
    ("insects", "Insect Control"),
    ("rodents", "Rodent Control"),
    ("termites", "Termite Treatment"),
    ("disinfection", "Disinfection & Sanitization"),
    ("other", "Other"),
];

const THANK_YOU: &str = "Thank you for contacting us! We will get back to you within 24 hours.";

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

fn field_setter(
    fields: &UseStateHandle<ContactFields>,
    apply: fn(&mut ContactFields, String),
) -> Callback<String> {
    let fields = fields.clone();
    Callback::from(move |value: String| {
        let mut next = (*fields).clone();
        apply(&mut next, value);
        fields.set(next);
    })
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn blur_feedback(
    feedback: &UseStateHandle<FieldFeedback>,
    check: fn(&str) -> FieldFeedback,
) -> Callback<FocusEvent> {
    let feedback = feedback.clone();
    Callback::from(move |e: FocusEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        feedback.set(check(&input.value()));
    })
}

fn focus_reset(feedback: &UseStateHandle<FieldFeedback>) -> Callback<FocusEvent> {
    let feedback = feedback.clone();
    Callback::from(move |_: FocusEvent| feedback.set(FieldFeedback::Neutral))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let submitting = use_state(|| false);
    let name_state = use_state(FieldFeedback::default);
    let phone_state = use_state(FieldFeedback::default);
    let email_state = use_state(FieldFeedback::default);

    let onsubmit = {
        let fields = fields.clone();
        let submitting = submitting.clone();
        let feedback = [name_state.clone(), phone_state.clone(), email_state.clone()];
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let submission = match fields.validate() {
                Ok(submission) => submission,
                Err(errors) => {
                    alert(&error_report(&errors));
                    return;
                }
            };

            // No backend yet: pretend the request takes a moment, then succeed.
            submitting.set(true);
            let fields = fields.clone();
            let submitting = submitting.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SIMULATED_SUBMIT_MS).await;
                alert(THANK_YOU);

                fields.set(ContactFields::default());
                for state in feedback.iter() {
                    state.set(FieldFeedback::Neutral);
                }
                submitting.set(false);

                match serde_json::to_string(&submission) {
                    Ok(json) => info!("Form data: {}", json),
                    Err(e) => warn!("Could not serialize form data: {}", e),
                }
            });
        })
    };

    let set_name = field_setter(&fields, |f, v| f.name = v);
    let set_phone = field_setter(&fields, |f, v| f.phone = v);
    let set_email = field_setter(&fields, |f, v| f.email = v);
    let set_service = field_setter(&fields, |f, v| f.service = v);
    let set_message = field_setter(&fields, |f, v| f.message = v);

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Full Name *"}</label>
                <input
                    type="text"
                    id="name"
                    class={classes!(name_state.class())}
                    placeholder="Your name"
                    value={fields.name.clone()}
                    oninput={set_name.reform(input_value)}
                    onblur={blur_feedback(&name_state, name_feedback)}
                    onfocus={focus_reset(&name_state)}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone Number *"}</label>
                <input
                    type="tel"
                    id="phone"
                    class={classes!(phone_state.class())}
                    placeholder="06 12 34 56 78"
                    value={fields.phone.clone()}
                    oninput={set_phone.reform(input_value)}
                    onblur={blur_feedback(&phone_state, phone_feedback)}
                    onfocus={focus_reset(&phone_state)}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email (optional)"}</label>
                <input
                    type="email"
                    id="email"
                    class={classes!(email_state.class())}
                    placeholder="you@example.com"
                    value={fields.email.clone()}
                    oninput={set_email.reform(input_value)}
                    onblur={blur_feedback(&email_state, email_feedback)}
                    onfocus={focus_reset(&email_state)}
                />
            </div>
            <div class="form-group">
                <label for="service">{"Service Needed *"}</label>
                <select
                    id="service"
                    onchange={set_service.reform(|e: Event| {
                        e.target_unchecked_into::<HtmlSelectElement>().value()
                    })}
                >
                    { for SERVICES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={fields.service == *value}>{*label}</option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="4"
                    placeholder="Tell us about the problem"
                    value={fields.message.clone()}
                    oninput={set_message.reform(|e: InputEvent| {
                        e.target_unchecked_into::<HtmlTextAreaElement>().value()
                    })}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                { if *submitting { "Sending..." } else { "Send Request" } }
            </button>
        </form>
    }
}
