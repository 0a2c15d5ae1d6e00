use log::Level;

pub const PLATFORM_NAME: &str = "SmartBioCity";
pub const STO_PLATFORM_NAME: &str = "SBCity Platform";
pub const COMPANY_NAME: &str = "SBCity";

/// Height of the sticky site header. Anchor navigation lands this far above
/// the target so the header does not cover it.
pub const HEADER_HEIGHT_PX: f64 = 80.0;

/// The scroll-to-top control is shown strictly past this offset.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Duration of the scroll-to-top enter and exit transitions.
pub const FADE_DURATION_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
