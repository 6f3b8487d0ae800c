use log::{warn, Level};

use crate::slider::ResizePolicy;

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("CONTACT_FORM_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => "http://localhost:3001/api/contact",  // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("CONTACT_FORM_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => "/api/contact",
    }
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Scroll distance in px after which the header switches to its active style.
pub const HEADER_ACTIVE_SCROLL_Y: f64 = 100.0;

/// Custom property each slider root declares to say how many items fit at once.
pub const SLIDER_ITEMS_PROPERTY: &str = "--slider-items";

/// Used when `--slider-items` is missing or not a usable number.
pub const DEFAULT_VISIBLE_ITEMS: usize = 1;

/// Slider resize behaviour, `SLIDER_RESIZE_POLICY=legacy` at build time keeps
/// the old unclamped position and never re-shows hidden buttons.
pub fn get_resize_policy() -> ResizePolicy {
    match option_env!("SLIDER_RESIZE_POLICY") {
        Some(name) => ResizePolicy::from_name(name).unwrap_or_else(|| {
            warn!("unknown SLIDER_RESIZE_POLICY {:?}, using the default", name);
            ResizePolicy::default()
        }),
        None => ResizePolicy::default(),
    }
}
