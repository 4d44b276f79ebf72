use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Upper bound for the board canvas backing store scale. Phones report
/// 3x or more, which triples the fill work for no visible gain.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Fraction of an element that has to be on screen before its reveal fires.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so reveals fire a little after the
/// element edge appears, not the instant it touches the fold.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
