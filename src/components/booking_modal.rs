use chrono::{Days, Local};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::analytics;
use crate::components::notification::NotificationKind;
use crate::validation::{validate_appointment, FormPayload, ValidationResult};

const APPOINTMENT_SUCCESS: &str = "Your appointment request has been submitted! \
    Our staff will contact you within 2 business hours to confirm your appointment.";

const SERVICES: &[(&str, &str)] = &[
    ("general", "General Consultation"),
    ("pediatrics", "Pediatrics"),
    ("dental", "Dental Care"),
    ("physio", "Physiotherapy"),
    ("vaccination", "Vaccinations"),
    ("checkup", "Annual Health Check"),
];

const TIME_SLOTS: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "13:00", "13:30", "14:00", "14:30",
    "15:00", "15:30", "16:00", "16:30",
];

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[cfg(test)]
mod tests {
    use super::APPOINTMENT_SUCCESS;

    #[test]
    fn success_message_sets_the_confirmation_expectation() {
        assert!(APPOINTMENT_SUCCESS.contains("2 business hours"));
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_notify: Callback<(String, NotificationKind)>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let dob = use_state(String::new);
    let service = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let consent = use_state(|| false);
    let first_input = use_node_ref();

    // Close on Escape while the modal is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        })
                            as Box<dyn FnMut(_)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        cleanup = Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            );
                        });
                    }
                }
                move || cleanup()
            },
            props.open,
        );
    }

    // Lock body scroll behind the open modal.
    use_effect_with_deps(
        move |open: &bool| {
            set_body_overflow(if *open { "hidden" } else { "" });
            move || set_body_overflow("")
        },
        props.open,
    );

    // Move focus into the dialog shortly after it appears.
    {
        let first_input = first_input.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    let first_input = first_input.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(100).await;
                        if let Some(input) = first_input.cast::<HtmlInputElement>() {
                            let _ = input.focus();
                        }
                    });
                }
                || ()
            },
            props.open,
        );
    }

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let dob = dob.clone();
        let service = service.clone();
        let date = date.clone();
        let time = time.clone();
        let consent = consent.clone();
        let on_notify = props.on_notify.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut payload = FormPayload::new();
            payload.set_text("name", (*name).clone());
            payload.set_text("email", (*email).clone());
            payload.set_text("phone", (*phone).clone());
            payload.set_text("dob", (*dob).clone());
            payload.set_text("service", (*service).clone());
            payload.set_text("date", (*date).clone());
            payload.set_text("time", (*time).clone());
            payload.set_checked("consent", *consent);

            match validate_appointment(&payload, Local::now().date_naive()) {
                ValidationResult::Invalid(reason) => {
                    on_notify.emit((reason, NotificationKind::Error));
                }
                ValidationResult::Valid => {
                    analytics::track_event("form_submit", "appointment", "booking-modal");
                    on_notify.emit((APPOINTMENT_SUCCESS.to_string(), NotificationKind::Success));
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    dob.set(String::new());
                    service.set(String::new());
                    date.set(String::new());
                    time.set(String::new());
                    consent.set(false);
                    on_close.emit(());
                }
            }
        })
    };

    if !props.open {
        return html! {};
    }

    let overlay_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let button_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Same-day bookings are accepted by validation; the picker just nudges
    // visitors towards tomorrow onwards.
    let min_date = Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <div id="appointment-modal" class="modal-overlay" onclick={overlay_close}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 2500;
                        padding: 1rem;
                    }
                    .modal-dialog {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 520px;
                        max-height: 90vh;
                        overflow-y: auto;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                    }
                    .modal-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1.5rem;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        color: #666;
                    }
                    .modal-dialog .form-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .modal-dialog .form-row .form-group { flex: 1; }
                "#}
            </style>
            <div class="modal-dialog" onclick={swallow_click}>
                <div class="modal-header">
                    <h2>{"Book an Appointment"}</h2>
                    <button class="modal-close" aria-label="Close" onclick={button_close}>
                        {"×"}
                    </button>
                </div>
                <form id="appointment-form" {onsubmit}>
                    <div class="form-group">
                        <label for="apt-name">{"Full Name"}</label>
                        <input
                            id="apt-name"
                            ref={first_input}
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
                    <div class="form-row">
                        <div class="form-group">
                            <label for="apt-email">{"Email"}</label>
                            <input
                                id="apt-email"
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
                            <label for="apt-phone">{"Phone"}</label>
                            <input
                                id="apt-phone"
                                type="tel"
                                name="phone"
                                placeholder="(555) 123-4567"
                                value={(*phone).clone()}
                                onchange={let phone = phone.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    phone.set(input.value());
                                }}
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="apt-dob">{"Date of Birth"}</label>
                        <input
                            id="apt-dob"
                            type="date"
                            name="dob"
                            value={(*dob).clone()}
                            onchange={let dob = dob.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                dob.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-group">
                        <label for="apt-service">{"Service"}</label>
                        <select
                            id="apt-service"
                            name="service"
                            onchange={let service = service.clone(); move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                service.set(select.value());
                            }}
                        >
                            <option value="" selected={service.is_empty()}>
                                {"Select a service"}
                            </option>
                            {
                                SERVICES.iter().map(|(value, label)| html! {
                                    <option
                                        value={*value}
                                        selected={*service == *value}
                                    >
                                        { *label }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="apt-date">{"Preferred Date"}</label>
                            <input
                                id="apt-date"
                                type="date"
                                name="date"
                                min={min_date}
                                value={(*date).clone()}
                                onchange={let date = date.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    date.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-group">
                            <label for="apt-time">{"Preferred Time"}</label>
                            <select
                                id="apt-time"
                                name="time"
                                onchange={let time = time.clone(); move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    time.set(select.value());
                                }}
                            >
                                <option value="" selected={time.is_empty()}>
                                    {"Select a time"}
                                </option>
                                {
                                    TIME_SLOTS.iter().map(|slot| html! {
                                        <option value={*slot} selected={*time == *slot}>
                                            { *slot }
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
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
                            {" I agree to the terms of service"}
                        </label>
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {"Request Appointment"}
                    </button>
                </form>
            </div>
        </div>
    }
}
