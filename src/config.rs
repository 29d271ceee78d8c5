use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub astrology: AstrologySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// A candidate is accepted when its score exceeds this
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: f64,
    /// Display cap for relaxed (fallback) result lists
    #[serde(default = "default_fallback_limit")]
    pub fallback_limit: usize,
    #[serde(default = "default_result_limit")]
    pub default_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            acceptance_threshold: default_acceptance_threshold(),
            fallback_limit: default_fallback_limit(),
            default_limit: default_result_limit(),
        }
    }
}

fn default_acceptance_threshold() -> f64 {
    60.0
}
fn default_fallback_limit() -> usize {
    6
}
fn default_result_limit() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_height_weight")]
    pub height: f64,
    #[serde(default = "default_religion_weight")]
    pub religion: f64,
    #[serde(default = "default_caste_weight")]
    pub caste: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_habits_weight")]
    pub habits: f64,
    #[serde(default = "default_income_weight")]
    pub income: f64,
    #[serde(default = "default_star_weight")]
    pub star: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            age: default_age_weight(),
            height: default_height_weight(),
            religion: default_religion_weight(),
            caste: default_caste_weight(),
            education: default_education_weight(),
            location: default_location_weight(),
            habits: default_habits_weight(),
            income: default_income_weight(),
            star: default_star_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(value: WeightsConfig) -> Self {
        Self {
            age: value.age,
            height: value.height,
            religion: value.religion,
            caste: value.caste,
            education: value.education,
            location: value.location,
            habits: value.habits,
            income: value.income,
            star: value.star,
        }
    }
}

fn default_age_weight() -> f64 {
    0.20
}
fn default_height_weight() -> f64 {
    0.14
}
fn default_religion_weight() -> f64 {
    0.14
}
fn default_caste_weight() -> f64 {
    0.12
}
fn default_education_weight() -> f64 {
    0.11
}
fn default_location_weight() -> f64 {
    0.10
}
fn default_habits_weight() -> f64 {
    0.08
}
fn default_income_weight() -> f64 {
    0.06
}
fn default_star_weight() -> f64 {
    0.05
}

#[derive(Debug, Clone, Deserialize)]
pub struct AstrologySettings {
    /// Porutham totals at or above this are "good"
    #[serde(default = "default_good_min")]
    pub good_min: u8,
    /// Totals at or above this (and below good_min) are "average"
    #[serde(default = "default_average_min")]
    pub average_min: u8,
}

impl Default for AstrologySettings {
    fn default() -> Self {
        Self {
            good_min: default_good_min(),
            average_min: default_average_min(),
        }
    }
}

fn default_good_min() -> u8 {
    7
}
fn default_average_min() -> u8 {
    4
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Defaults baked into the structs
    /// 2. config/default.toml, then config/local.toml
    /// 3. Environment variables prefixed with SANGAM__
    ///    (e.g. SANGAM__MATCHING__ACCEPTANCE_THRESHOLD)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SANGAM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SANGAM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.age, 0.20);
        assert_eq!(weights.star, 0.05);

        let scoring: ScoringWeights = weights.into();
        assert!((scoring.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.acceptance_threshold, 60.0);
        assert_eq!(matching.fallback_limit, 6);
    }

    #[test]
    fn test_verdict_bands_ordered() {
        let astrology = AstrologySettings::default();
        assert!(astrology.good_min > astrology.average_min);
    }
}
