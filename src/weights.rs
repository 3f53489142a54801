//! Phase weighting. Compiled-in defaults reflect the relative importance of
//! each phase; callers may override individual phases per audit. Weights
//! are re-normalized to sum to 100 before use.

use crate::error::ConfigError;
use std::collections::BTreeMap;

/// Default phase weights. Structural and flow categories carry more weight
/// than peripheral checks. Sums to 100.
pub const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    ("structure", 20.0),
    ("lexical", 15.0),
    ("headings", 15.0),
    ("coverage", 15.0),
    ("density", 15.0),
    ("vocabulary", 10.0),
    ("transitions", 10.0),
];

/// Immutable weight configuration. The engine never persists overrides;
/// they are supplied per call and applied on top of the defaults.
#[derive(Debug, Clone)]
pub struct WeightConfig {
    defaults: BTreeMap<String, f64>,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_WEIGHTS
                .iter()
                .map(|(phase, weight)| (phase.to_string(), *weight))
                .collect(),
        }
    }
}

impl WeightConfig {
    /// Build a config from explicit defaults, for callers with their own
    /// phase taxonomy
    pub fn from_defaults(defaults: BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        for (phase, weight) in &defaults {
            if *weight < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    phase: phase.clone(),
                    weight: *weight,
                });
            }
        }
        Ok(Self { defaults })
    }

    /// Weight of a phase before normalization. Phases absent from both
    /// defaults and overrides score at weight 0.
    pub fn default_weight(&self, phase: &str) -> f64 {
        self.defaults.get(phase).copied().unwrap_or(0.0)
    }

    /// Apply overrides on top of the defaults and normalize the result to
    /// sum to exactly 100, preserving relative proportions. Negative
    /// override weights are rejected fail-fast.
    pub fn resolve(
        &self,
        overrides: Option<&BTreeMap<String, f64>>,
    ) -> Result<BTreeMap<String, f64>, ConfigError> {
        let mut merged = self.defaults.clone();
        if let Some(overrides) = overrides {
            for (phase, weight) in overrides {
                if *weight < 0.0 {
                    return Err(ConfigError::NegativeWeight {
                        phase: phase.clone(),
                        weight: *weight,
                    });
                }
                merged.insert(phase.clone(), *weight);
            }
        }

        let total: f64 = merged.values().sum();
        if total <= f64::EPSILON {
            return Err(ConfigError::ZeroWeightTotal);
        }

        let scale = 100.0 / total;
        for weight in merged.values_mut() {
            *weight *= scale;
        }
        Ok(merged)
    }
}
