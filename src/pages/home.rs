use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::components::booking_modal::BookingModal;
use crate::components::contact_form::ContactForm;
use crate::components::notification::{
    NoticeAction, NoticeBoard, NotificationKind, NotificationStack,
};
use crate::components::testimonials::Testimonials;
use crate::{scroll_to_section, Route};

const EMERGENCY_PHONE: &str = "(555) 911-2400";

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🩺",
        "General Consultation",
        "Same-week appointments with our family doctors for everyday health concerns.",
    ),
    (
        "🧒",
        "Pediatrics",
        "Gentle, thorough care for children from newborns to teenagers.",
    ),
    (
        "🦷",
        "Dental Care",
        "Cleanings, fillings and preventive dentistry under the same roof.",
    ),
    (
        "🏃",
        "Physiotherapy",
        "Rehabilitation programs tailored to your recovery goals.",
    ),
    (
        "💉",
        "Vaccinations",
        "Routine and travel immunizations, no referral needed.",
    ),
    (
        "📋",
        "Annual Health Check",
        "A full picture of your health with labs and a follow-up consultation.",
    ),
];

const DOCTORS: &[(&str, &str, &str)] = &[
    (
        "/assets/doctors/chen.jpg",
        "Dr. Maya Chen",
        "Family Medicine",
    ),
    ("/assets/doctors/osei.jpg", "Dr. James Osei", "Pediatrics"),
    (
        "/assets/doctors/larsen.jpg",
        "Dr. Ingrid Larsen",
        "Physiotherapy",
    ),
];

const TIPS: &[(&str, &str)] = &[
    (
        "Book check-ups before symptoms",
        "Most conditions we treat are caught early during routine visits, not emergencies.",
    ),
    (
        "Keep your vaccination record current",
        "Bring your record to any visit and we will flag anything due or overdue.",
    ),
    (
        "Hydrate before blood tests",
        "Drinking water the evening before makes morning lab draws quicker and easier.",
    ),
];

/// Adds `visible` to animated cards once they scroll into the lower 90% of
/// the viewport. No-ops when the section is absent.
fn reveal_on_scroll(document: &Document, viewport_height: f64) {
    let Ok(nodes) = document.query_selector_all(".service-card, .doctor-card, .tip-card") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        if element.get_bounding_client_rect().top() < viewport_height * 0.9 {
            let classes = element.class_name();
            if !classes.contains("visible") {
                element.set_class_name(&format!("{classes} visible"));
            }
        }
    }
}

/// Swaps `data-src` into `src` for images approaching the viewport, once.
fn load_nearby_images(document: &Document, viewport_height: f64) {
    let Ok(nodes) = document.query_selector_all("img[data-src]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        if element.get_bounding_client_rect().top() < viewport_height + 200.0 {
            if let Some(src) = element.get_attribute("data-src") {
                let _ = element.set_attribute("src", &src);
                let _ = element.remove_attribute("data-src");
            }
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let board = use_reducer(NoticeBoard::default);
    let booking_open = use_state(|| false);

    // Start at the top when landing here from another route.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Scroll-triggered card reveals and lazy image loading.
    use_effect_with_deps(
        move |_| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    let window_inner = window.clone();
                    let document_inner = document.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let viewport = window_inner
                            .inner_height()
                            .ok()
                            .and_then(|v| v.as_f64())
                            .unwrap_or(0.0);
                        reveal_on_scroll(&document_inner, viewport);
                        load_nearby_images(&document_inner, viewport);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    // Handle whatever is already in view before any scrolling.
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    reveal_on_scroll(&document, viewport);
                    load_nearby_images(&document, viewport);

                    cleanup = Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    });
                }
            }
            move || cleanup()
        },
        (),
    );

    let notify = {
        let board = board.clone();
        Callback::from(move |(message, kind): (String, NotificationKind)| {
            board.dispatch(NoticeAction::Push(message, kind));
        })
    };
    let on_dismiss = {
        let board = board.clone();
        Callback::from(move |id: u32| board.dispatch(NoticeAction::Dismiss(id)))
    };

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(true))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_| booking_open.set(false))
    };

    let scroll_to_services = Callback::from(|_: MouseEvent| scroll_to_section("services"));
    let track_emergency = Callback::from(|_: MouseEvent| {
        analytics::track_event("emergency_call_click", "engagement", "Emergency Phone Number");
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .home section { padding: 4rem 1rem; }
                    .section-inner { max-width: 1100px; margin: 0 auto; }
                    .hero {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(160deg, #e8f4fb, #ffffff);
                        padding: 6rem 1rem 4rem;
                    }
                    .hero h1 { font-size: 2.6rem; color: #0b3954; margin-bottom: 1rem; }
                    .hero p { font-size: 1.2rem; color: #456; max-width: 560px; }
                    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; justify-content: center; }
                    .btn {
                        padding: 12px 28px;
                        border-radius: 8px;
                        font-size: 1rem;
                        cursor: pointer;
                        border: none;
                    }
                    .btn-primary { background: #0077be; color: white; }
                    .btn-outline { background: transparent; color: #0077be; border: 2px solid #0077be; }
                    .emergency-banner {
                        background: #b22234;
                        color: white;
                        text-align: center;
                        padding: 0.75rem 1rem;
                    }
                    .emergency-phone {
                        color: white;
                        font-weight: bold;
                        cursor: pointer;
                        text-decoration: underline;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .service-card, .doctor-card, .tip-card {
                        background: white;
                        border: 1px solid #e3edf4;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 2px 12px rgba(11, 57, 84, 0.06);
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    .service-card.visible, .doctor-card.visible, .tip-card.visible {
                        animation: fadeInUp 0.8s ease forwards;
                    }
                    @keyframes fadeInUp {
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .service-icon { font-size: 2rem; }
                    .doctor-card { text-align: center; }
                    .doctor-photo {
                        width: 140px;
                        height: 140px;
                        border-radius: 50%;
                        object-fit: cover;
                        background: #e8f4fb;
                    }
                    .doctor-specialty { color: #0077be; font-size: 0.95rem; }
                    .contact-section { background: #f5f9fc; }
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        margin-top: 2rem;
                    }
                    @media (max-width: 768px) {
                        .contact-layout { grid-template-columns: 1fr; }
                        .hero h1 { font-size: 2rem; }
                    }
                    .form-group { margin-bottom: 1rem; display: flex; flex-direction: column; gap: 0.3rem; }
                    .form-group input, .form-group select, .form-group textarea {
                        padding: 10px 12px;
                        border: 1px solid #cdd9e2;
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .consent-group label { display: flex; align-items: center; gap: 0.5rem; flex-direction: row; }
                    .site-footer {
                        background: #0b3954;
                        color: #cfe3f1;
                        text-align: center;
                        padding: 2rem 1rem;
                    }
                    .site-footer a { color: #7eb2ff; margin: 0 0.5rem; }
                "#}
            </style>

            <NotificationStack board={(*board).clone()} {on_dismiss} />

            <div class="emergency-banner">
                {"Medical emergency? Call us any time: "}
                <span class="emergency-phone" onclick={track_emergency}>
                    { EMERGENCY_PHONE }
                </span>
            </div>

            <section class="hero" id="home">
                <h1>{"Care for the whole family, around the corner"}</h1>
                <p>
                    {"Bayview Family Clinic brings doctors, dentists and \
                      physiotherapists together so your family's health has \
                      one home."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={open_booking.clone()}>
                        {"Book Appointment"}
                    </button>
                    <button class="btn btn-outline" onclick={scroll_to_services}>
                        {"Our Services"}
                    </button>
                </div>
            </section>

            <section id="services">
                <div class="section-inner">
                    <h2>{"Our Services"}</h2>
                    <div class="card-grid">
                        {
                            SERVICES.iter().map(|(icon, title, blurb)| html! {
                                <div class="service-card">
                                    <div class="service-icon">{ *icon }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *blurb }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="doctors">
                <div class="section-inner">
                    <h2>{"Meet Our Doctors"}</h2>
                    <div class="card-grid">
                        {
                            DOCTORS.iter().map(|(photo, name, specialty)| html! {
                                <div class="doctor-card">
                                    <img
                                        class="doctor-photo"
                                        data-src={*photo}
                                        alt={format!("Portrait of {name}")}
                                    />
                                    <h3>{ *name }</h3>
                                    <div class="doctor-specialty">{ *specialty }</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="tips">
                <div class="section-inner">
                    <h2>{"Health Tips"}</h2>
                    <div class="card-grid">
                        {
                            TIPS.iter().map(|(title, body)| html! {
                                <div class="tip-card">
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <Testimonials />

            <section class="contact-section" id="contact">
                <div class="section-inner">
                    <h2>{"Get in Touch"}</h2>
                    <div class="contact-layout">
                        <div class="contact-info">
                            <p>{"12 Harbor Road, Bayview"}</p>
                            <p>{"Mon–Fri 8:00–18:00, Sat 9:00–13:00"}</p>
                            <p>{"Reception: (555) 214-0080"}</p>
                            <p>
                                {"Prefer to book directly? "}
                                <button class="btn btn-outline" onclick={open_booking}>
                                    {"Book Appointment"}
                                </button>
                            </p>
                        </div>
                        <ContactForm on_notify={notify.clone()} />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
                <p>{"© 2026 Bayview Family Clinic"}</p>
            </footer>

            <BookingModal
                open={*booking_open}
                on_close={close_booking}
                on_notify={notify}
            />
        </div>
    }
}
