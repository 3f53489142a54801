use thiserror::Error;

/// Fatal configuration errors raised while building a registry or resolving
/// weights. These indicate a programming mistake, not bad input, and are
/// reported at startup rather than during an audit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate rule id '{id}' registered")]
    DuplicateRule { id: String },

    #[error("negative weight {weight} for phase '{phase}'")]
    NegativeWeight { phase: String, weight: f64 },

    #[error("weight configuration sums to zero; no phase can be scored")]
    ZeroWeightTotal,
}
