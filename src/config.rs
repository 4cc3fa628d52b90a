/// localStorage key recording the visitor's cookie-banner choice.
pub const CONSENT_STORAGE_KEY: &str = "cookie_consent";

/// How long a notification stays on screen before removing itself.
pub const NOTICE_TTL_MS: u32 = 5_000;

/// Testimonial carousel auto-rotation period.
pub const CAROUSEL_PERIOD_MS: u32 = 8_000;

/// Delay before the cookie banner appears on a first visit.
pub const CONSENT_BANNER_DELAY_MS: u32 = 2_000;

#[cfg(debug_assertions)]
pub fn analytics_enabled() -> bool {
    false // Local development only logs events to the console
}

#[cfg(not(debug_assertions))]
pub fn analytics_enabled() -> bool {
    true
}
