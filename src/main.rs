use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod validation;
mod components {
    pub mod booking_modal;
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod notification;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use components::cookie_banner::CookieBanner;
use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
    }
}

/// Smooth-scroll to a page section, keeping it clear of the fixed header.
/// No-ops when the section (or the header) is not on the current page.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let header_height = document
        .get_element_by_id("header")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top() - header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if let Some(window) = window() {
                    let window_inner = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = window_inner.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 100.0);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    cleanup = Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    });
                }
                move || cleanup()
            },
            (),
        );
    }

    // The open menu claims the whole viewport on mobile; park scrolling
    // underneath it.
    use_effect_with_deps(
        move |open: &bool| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body
                    .style()
                    .set_property("overflow", if *open { "hidden" } else { "" });
            }
            || ()
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        });
        html! {
            <a href={format!("#{id}")} class="nav-link" {onclick}>{ label }</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header id="header" class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        background: rgba(255, 255, 255, 0.92);
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled { box-shadow: 0 2px 12px rgba(11, 57, 84, 0.15); }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1rem;
                    }
                    .nav-logo { font-weight: bold; font-size: 1.2rem; color: #0b3954; text-decoration: none; }
                    .nav-right { display: flex; gap: 1.5rem; }
                    .nav-link { color: #2a3b47; text-decoration: none; }
                    .nav-link:hover { color: #0077be; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 3px;
                        background: #0b3954;
                        margin: 5px 0;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right {
                            display: none;
                            position: fixed;
                            inset: 56px 0 0 0;
                            background: white;
                            flex-direction: column;
                            align-items: center;
                            padding-top: 2rem;
                            gap: 2rem;
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Bayview Family Clinic"}
                </Link<Route>>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_link("services", "Services") }
                    { nav_link("doctors", "Doctors") }
                    { nav_link("tips", "Health Tips") }
                    { nav_link("testimonials", "Testimonials") }
                    { nav_link("contact", "Contact") }
                </div>
            </div>
        </header>
    }
}

/// Uncaught runtime errors are logged and the page keeps running in a
/// degraded state; clicks on `.btn` elements feed the analytics hooks.
fn install_global_listeners() {
    let Some(window) = window() else { return };

    let on_error = Closure::wrap(Box::new(move |e: web_sys::ErrorEvent| {
        gloo_console::error!("Uncaught error:", e.message());
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let Some(document) = window.document() else {
        return;
    };
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if let Ok(Some(button)) = target.closest(".btn") {
            let label = button.text_content().unwrap_or_default().trim().to_string();
            analytics::track_event("button_click", "engagement", &label);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <CookieBanner />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    install_global_listeners();

    info!("Starting Bayview Family Clinic site");
    yew::Renderer::<App>::new().render();
}
