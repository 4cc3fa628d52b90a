use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                    .legal-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem 4rem;
                        line-height: 1.7;
                        color: #2a3b47;
                    }
                    .legal-page h1 { color: #0b3954; }
                    .legal-page h2 { margin-top: 2rem; color: #0b3954; }
                    .legal-back { margin-top: 3rem; }
                "#}
            </style>
            <h1>{ props.title.clone() }</h1>
            { for props.children.iter() }
            <p class="legal-back">
                <Link<Route> to={Route::Home}>{"← Back to the clinic"}</Link<Route>>
            </p>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <h2>{"What we collect"}</h2>
            <p>
                {"Details you enter into our contact and booking forms stay in \
                  your browser until you submit them. Our reception team uses \
                  them only to respond to your request."}
            </p>
            <h2>{"Cookies"}</h2>
            <p>
                {"We store a single value on your device recording whether you \
                  accepted or declined cookies, so we do not ask again. \
                  Declining never blocks any part of the site."}
            </p>
            <h2>{"Analytics"}</h2>
            <p>
                {"Anonymous interaction events (such as button clicks) help us \
                  understand which services people look for. No health \
                  information is ever included."}
            </p>
        </LegalPage>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <h2>{"Appointments"}</h2>
            <p>
                {"Submitting a booking request is not a confirmed appointment. \
                  Our staff confirms every request by phone or email within \
                  2 business hours."}
            </p>
            <h2>{"Cancellations"}</h2>
            <p>
                {"Please let us know at least 24 hours in advance if you cannot \
                  make your appointment so we can offer the slot to another \
                  patient."}
            </p>
            <h2>{"Medical advice"}</h2>
            <p>
                {"Content on this site, including our health tips, is general \
                  information and not a substitute for a consultation."}
            </p>
        </LegalPage>
    }
}
