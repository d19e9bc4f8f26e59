use std::str::FromStr;

use log::{warn, Level};
use thiserror::Error;
use web_sys::window;

/// Viewport width (px) from which the decorative orb is rendered.
pub const ORB_BREAKPOINT_PX: f64 = 1024.0;

pub const FRAME_INTERVAL_MS: u32 = 16;

pub const PULSE_TICK_MS: u32 = 33;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn shows_orb(viewport_width: f64) -> bool {
    viewport_width >= ORB_BREAKPOINT_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Revision {
    #[default]
    Motion,
    Classic,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown page revision `{0}`")]
    UnknownRevision(String),
}

impl FromStr for Revision {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "motion" | "animated" => Ok(Revision::Motion),
            "classic" | "static" => Ok(Revision::Classic),
            other => Err(ConfigError::UnknownRevision(other.to_string())),
        }
    }
}

/// Reads `revision=` from a location search string such as `?revision=classic`.
pub fn revision_from_query(search: &str) -> Result<Revision, ConfigError> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "revision")
        .map_or(Ok(Revision::default()), |(_, value)| value.parse())
}

pub fn current_revision() -> Revision {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match revision_from_query(&search) {
        Ok(revision) => revision,
        Err(err) => {
            warn!("{err}, rendering the default revision");
            Revision::default()
        }
    }
}
