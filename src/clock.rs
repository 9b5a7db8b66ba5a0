//! Wall-clock reads for render-time stamping.

/// Four-digit calendar year from the host clock, in the host's local timezone.
///
/// Read at call time, never cached: a session still alive at midnight on
/// December 31st picks up the new year on its next render.
#[must_use]
pub fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        u32::try_from(chrono::Local::now().year()).expect("local clock year should be positive")
    }
}
