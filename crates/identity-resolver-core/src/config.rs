//! Configuration for the resolution engine.
//!
//! The engine itself never reads the environment; this module is an opt-in
//! layer for callers that want the factor weights to come from files or
//! environment variables instead of the shipped constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::weights::FactorWeights;

/// Engine configuration: currently just the factor weight profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Relative importance of the five scoring factors.
    pub weights: FactorWeights,
}

impl ResolverConfig {
    /// Load configuration from files and environment.
    ///
    /// Sources are layered in order:
    /// 1. `config/resolver.toml` (optional)
    /// 2. Environment variables with the `IDENTITY_RESOLVER` prefix
    ///    (e.g. `IDENTITY_RESOLVER__WEIGHTS__CONTENT=0.30`)
    ///
    /// Weights are validated fail-fast before the config is returned.
    pub fn load() -> EngineResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/resolver").required(false))
            .add_source(
                config::Environment::with_prefix("IDENTITY_RESOLVER")
                    .separator("__")
                    .try_parsing(true),
            );

        let cfg: ResolverConfig = builder.build()?.try_deserialize()?;
        cfg.weights.validate().map_err(EngineError::from)?;
        Ok(cfg)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when the file cannot be read or
    /// parsed, and [`EngineError::InvalidWeightConfiguration`] when the
    /// weights it declares are not a convex combination.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        let cfg: ResolverConfig = toml::from_str(&content)
            .map_err(|e| EngineError::Config(format!("failed to parse config file: {}", e)))?;

        cfg.weights.validate().map_err(EngineError::from)?;
        Ok(cfg)
    }
}
