use dioxus::prelude::*;

use serde::{Deserialize, Serialize};

use crate::layout::dimensions::DEFAULT_PLACEHOLDER_BACKGROUND;

/// Presentation settings shared by the loading components.
///
/// Provided once at the application root through the Dioxus context and read with
/// [`use_layout_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Render the screen-reader progress announcement of coordinated sections
    pub announce_progress: bool,
    /// Disable the skeleton pulse animation
    pub reduced_motion: bool,
    pub placeholder_background: String,
    /// Latency of the demonstration data sources
    pub simulated_latency_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            announce_progress: true,
            reduced_motion: false,
            placeholder_background: DEFAULT_PLACEHOLDER_BACKGROUND.to_owned(),
            simulated_latency_ms: 1200,
        }
    }
}

impl LayoutConfig {
    /// Defaults overridden by the `SHIFTLESS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, "SHIFTLESS_ANNOUNCE_PROGRESS") {
            config.announce_progress = v;
        }
        if let Some(v) = parse_var(&lookup, "SHIFTLESS_REDUCED_MOTION") {
            config.reduced_motion = v;
        }
        if let Some(v) = lookup("SHIFTLESS_PLACEHOLDER_BACKGROUND") {
            config.placeholder_background = v;
        }
        if let Some(v) = parse_var(&lookup, "SHIFTLESS_LATENCY_MS") {
            config.simulated_latency_ms = v;
        }
        log::debug!("layout config: {config:?}");
        config
    }
}

fn parse_var<T: core::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T::Err: core::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring {key}={raw:?}: {e}");
            None
        }
    }
}

/// Installs `config` as the layout settings of the current subtree
pub fn use_layout_config_provider(config: impl FnOnce() -> LayoutConfig) -> Signal<LayoutConfig> {
    use_context_provider(|| Signal::new(config()))
}

/// Layout settings of the closest provider, defaults when there is none
pub fn use_layout_config() -> LayoutConfig {
    match try_use_context::<Signal<LayoutConfig>>() {
        Some(config) => config.read().clone(),
        None => LayoutConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(LayoutConfig::from_lookup(|_| None), LayoutConfig::default());
    }

    #[test]
    fn env_overrides() {
        let config = LayoutConfig::from_lookup(lookup_from(&[
            ("SHIFTLESS_ANNOUNCE_PROGRESS", "false"),
            ("SHIFTLESS_REDUCED_MOTION", " true "),
            ("SHIFTLESS_PLACEHOLDER_BACKGROUND", "#111827"),
            ("SHIFTLESS_LATENCY_MS", "250"),
        ]));
        assert!(!config.announce_progress);
        assert!(config.reduced_motion);
        assert_eq!(config.placeholder_background, "#111827");
        assert_eq!(config.simulated_latency_ms, 250);
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = LayoutConfig::from_lookup(lookup_from(&[
            ("SHIFTLESS_REDUCED_MOTION", "sometimes"),
            ("SHIFTLESS_LATENCY_MS", "-3"),
        ]));
        assert_eq!(config, LayoutConfig::default());
    }
}
