use log::Level;

/// localStorage key holding the cookie decision. Bump the suffix when the
/// stored shape changes.
pub const CONSENT_STORAGE_KEY: &str = "gg-consent-v1";

/// Simulated send time of the contact form.
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1_000;
/// How long the thank-you note stays visible.
pub const CONTACT_FEEDBACK_MS: u32 = 5_000;

/// Below this scroll offset the header is always shown.
pub const HEADER_PIN_OFFSET: f64 = 100.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Development build, includes consent transitions
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
