use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics;
use crate::components::notification::NotificationKind;
use crate::validation::{validate_contact, FormPayload, ValidationResult};

const CONTACT_SUCCESS: &str =
    "Thank you for contacting us! We will get back to you within 24 hours.";

#[cfg(test)]
mod tests {
    use super::CONTACT_SUCCESS;

    #[test]
    fn success_message_sets_the_24_hour_expectation() {
        assert!(CONTACT_SUCCESS.contains("24 hours"));
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(String, NotificationKind)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let consent = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let consent = consent.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut payload = FormPayload::new();
            payload.set_text("name", (*name).clone());
            payload.set_text("email", (*email).clone());
            payload.set_text("message", (*message).clone());
            payload.set_checked("consent", *consent);

            match validate_contact(&payload) {
                ValidationResult::Invalid(reason) => {
                    // Leave the fields as typed so the visitor can fix them.
                    on_notify.emit((reason, NotificationKind::Error));
                }
                ValidationResult::Valid => {
                    analytics::track_event("form_submit", "contact", "contact-form");
                    on_notify.emit((CONTACT_SUCCESS.to_string(), NotificationKind::Success));
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    consent.set(false);
                }
            }
        })
    };

    html! {
        <form id="contact-form" class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Full Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder="How can we help?"
                    value={(*message).clone()}
                    onchange={let message = message.clone(); move |e: Event| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
            </div>
            <div class="form-group consent-group">
                <label>
                    <input
                        type="checkbox"
                        name="consent"
                        checked={*consent}
                        onchange={let consent = consent.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            consent.set(input.checked());
                        }}
                    />
                    {" I agree to the privacy policy"}
                </label>
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
