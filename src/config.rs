use log::{error, Level};
use thiserror::Error;

use crate::hero::beats::HeroTimeline;

#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "/assets" // Served by the dev server
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    "/static/assets" // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", get_asset_base_url(), name)
}

pub const HERO_VIDEO: &str = "hero.mp4";
pub const HERO_POSTER: &str = "hero-poster.jpg";

/// Share of the hero that must be on screen for the sequence to run.
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.1;
/// Fixed header height plus breathing room.
pub const HEADER_OFFSET_PX: f64 = 85.0;

pub const CONTACT_EMAIL: &str = "inquiry@micronhouse.com";

const HERO_TIMELINE_JSON: &str = include_str!("../assets/hero_timeline.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hero timeline is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playback rate {0} must be a positive number")]
    PlaybackRate(f64),
    #[error("media unlock threshold {0}s must be a non-negative number")]
    UnlockThreshold(f64),
}

pub fn parse_hero_timeline(raw: &str) -> Result<HeroTimeline, ConfigError> {
    let timeline: HeroTimeline = serde_json::from_str(raw)?;
    if !(timeline.playback_rate.is_finite() && timeline.playback_rate > 0.0) {
        return Err(ConfigError::PlaybackRate(timeline.playback_rate));
    }
    if !(timeline.unlock_at_media_secs.is_finite() && timeline.unlock_at_media_secs >= 0.0) {
        return Err(ConfigError::UnlockThreshold(timeline.unlock_at_media_secs));
    }
    Ok(timeline)
}

/// The embedded hero timeline, or the standard one if it does not validate.
pub fn hero_timeline() -> HeroTimeline {
    match parse_hero_timeline(HERO_TIMELINE_JSON) {
        Ok(timeline) => timeline,
        Err(err) => {
            error!("{}; falling back to the standard hero timeline", err);
            HeroTimeline::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_timeline_is_valid() {
        let timeline = parse_hero_timeline(HERO_TIMELINE_JSON).unwrap();
        assert_eq!(timeline, HeroTimeline::default());
    }

    #[test]
    fn rejects_non_positive_rate() {
        let err = parse_hero_timeline(r#"{"playback_rate": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::PlaybackRate(rate) if rate == 0.0));
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = parse_hero_timeline(r#"{"unlock_at_media_secs": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnlockThreshold(_)));
    }

    #[test]
    fn surfaces_beat_table_errors() {
        let raw = r#"{"beats": [{"fire_at_ms": 0, "effect": "reveal_logo"}]}"#;
        let err = parse_hero_timeline(raw).unwrap_err();
        assert!(err.to_string().contains("sentence 0 is never shown"), "{}", err);
    }

    #[test]
    fn asset_urls_join_the_base() {
        assert_eq!(asset_url(HERO_VIDEO), format!("{}/hero.mp4", get_asset_base_url()));
    }
}
