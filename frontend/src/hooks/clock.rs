use web_sys::{js_sys::Date, window};

pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or_else(|| Date::now() / 1000.0)
}
