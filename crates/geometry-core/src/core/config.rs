use crate::core::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_MAX_BOND: f64 = 2.93;
pub const DEFAULT_MIN_BOND: f64 = 0.0;

// Shorter than any covalent bond involving hydrogen.
const SHORTEST_PLAUSIBLE_BOND: f64 = 0.7;

/// Distance window used to perceive bonds from coordinates.
///
/// Two atoms are bonded when `min_bond < distance < max_bond`, in the same
/// units as the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BondingConfig {
    pub max_bond: f64,
    pub min_bond: f64,
}

impl Default for BondingConfig {
    fn default() -> Self {
        Self {
            max_bond: DEFAULT_MAX_BOND,
            min_bond: DEFAULT_MIN_BOND,
        }
    }
}

impl BondingConfig {
    pub fn builder() -> BondingConfigBuilder {
        BondingConfigBuilder::new()
    }

    /// Whether a pair at `distance` falls inside the bonding window.
    pub fn is_bonded(&self, distance: f64) -> bool {
        distance > self.min_bond && distance < self.max_bond
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_bond.is_finite() || self.min_bond < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "min_bond",
                reason: format!("must be finite and non-negative, got {}", self.min_bond),
            });
        }
        if !self.max_bond.is_finite() || self.max_bond <= self.min_bond {
            return Err(ConfigError::InvalidParameter {
                name: "max_bond",
                reason: format!(
                    "must be finite and greater than min_bond ({}), got {}",
                    self.min_bond, self.max_bond
                ),
            });
        }
        if self.max_bond < SHORTEST_PLAUSIBLE_BOND {
            warn!(
                max_bond = self.max_bond,
                "Bonding cutoff is shorter than any covalent bond; no bonds are likely to be found."
            );
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct BondingConfigBuilder {
    max_bond: Option<f64>,
    min_bond: Option<f64>,
}

impl BondingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_bond(mut self, distance: f64) -> Self {
        self.max_bond = Some(distance);
        self
    }
    pub fn min_bond(mut self, distance: f64) -> Self {
        self.min_bond = Some(distance);
        self
    }

    pub fn build(self) -> Result<BondingConfig, ConfigError> {
        let config = BondingConfig {
            max_bond: self.max_bond.unwrap_or(DEFAULT_MAX_BOND),
            min_bond: self.min_bond.unwrap_or(DEFAULT_MIN_BOND),
        };
        config.validate()?;
        Ok(config)
    }
}
