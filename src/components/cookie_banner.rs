use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// The visitor's one-time cookie choice. Written once, never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

/// The banner shows only while nothing at all is stored; any recorded value
/// (even one a future version no longer recognizes) keeps it hidden.
pub fn should_show_banner(stored: Option<&str>) -> bool {
    stored.is_none()
}

fn stored_value() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::CONSENT_STORAGE_KEY).ok())
        .flatten()
}

fn store_choice(choice: ConsentChoice) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        if storage
            .set_item(config::CONSENT_STORAGE_KEY, choice.as_str())
            .is_err()
        {
            gloo_console::error!("Failed to persist cookie choice");
        }
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);

    // Give the page a moment to settle before asking.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::CONSENT_BANNER_DELAY_MS, move || {
                    if should_show_banner(stored_value().as_deref()) {
                        visible.set(true);
                    }
                });
                move || drop(timeout)
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    let on_accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            store_choice(ConsentChoice::Accepted);
            visible.set(false);
        })
    };
    let on_decline = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            store_choice(ConsentChoice::Declined);
            visible.set(false);
        })
    };

    html! {
        <div class="cookie-banner">
            <style>
                {r#"
                    .cookie-banner {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        background: #343a40;
                        color: white;
                        padding: 20px;
                        z-index: 2000;
                        box-shadow: 0 -2px 10px rgba(0, 0, 0, 0.1);
                    }
                    .cookie-banner-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 20px;
                    }
                    .cookie-banner p {
                        margin: 0;
                        font-size: 14px;
                    }
                    .cookie-banner a { color: #7eb2ff; }
                    .cookie-banner-actions {
                        display: flex;
                        gap: 10px;
                    }
                    .cookie-accept {
                        background: #0077be;
                        color: white;
                        border: none;
                        padding: 10px 20px;
                        border-radius: 6px;
                        cursor: pointer;
                        font-size: 14px;
                    }
                    .cookie-decline {
                        background: transparent;
                        color: white;
                        border: 1px solid #ccc;
                        padding: 10px 20px;
                        border-radius: 6px;
                        cursor: pointer;
                        font-size: 14px;
                    }
                "#}
            </style>
            <div class="cookie-banner-content">
                <p>
                    {"We use cookies to enhance your experience on our website. \
                      By continuing to browse, you agree to our use of cookies. "}
                    <Link<Route> to={Route::Privacy}>{"Learn more"}</Link<Route>>
                </p>
                <div class="cookie-banner-actions">
                    <button class="cookie-accept" onclick={on_accept}>{"Accept"}</button>
                    <button class="cookie-decline" onclick={on_decline}>{"Decline"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shows_only_on_first_visit() {
        assert!(should_show_banner(None));
        assert!(!should_show_banner(Some("accepted")));
        assert!(!should_show_banner(Some("declined")));
        // Unknown stored values still suppress the banner.
        assert!(!should_show_banner(Some("whatever")));
    }

    #[test]
    fn choice_round_trips_through_storage_strings() {
        assert_eq!(
            ConsentChoice::parse(ConsentChoice::Accepted.as_str()),
            Some(ConsentChoice::Accepted)
        );
        assert_eq!(
            ConsentChoice::parse(ConsentChoice::Declined.as_str()),
            Some(ConsentChoice::Declined)
        );
        assert_eq!(ConsentChoice::parse(""), None);
    }
}
