use thiserror::Error;

/// Configuration for the adaptive solver.
///
/// With the `serde` feature enabled, a config can be deserialized from any
/// serde format. Missing fields take their default values, and the result is
/// validated exactly as [`Config::new`] validates its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    tolerance: f64,
    order: f64,
    safety: f64,
    max_retries: usize,
    max_growth: f64,
}

/// Errors that can occur when validating an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("order must be finite and positive")]
    Order,

    #[error("safety factor must be in (0, 1]")]
    Safety,

    #[error("max_growth must be finite and at least 1")]
    MaxGrowth,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 4.0, 0.1).unwrap()
    }
}

impl Config {
    /// Default cap on rejections per slot.
    pub const DEFAULT_MAX_RETRIES: usize = 1000;

    /// Default growth applied when the embedded estimates agree exactly.
    pub const DEFAULT_MAX_GROWTH: f64 = 5.0;

    /// Creates a new config with the default retry limit and growth cap.
    ///
    /// - `tolerance`: allowed local error per unit step.
    /// - `order`: divisor of the error exponent, usually the order of the
    ///   lower-order estimate (4).
    /// - `safety`: conservative multiplier on the computed scale factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` or `order` is not finite and positive,
    /// or if `safety` is outside `(0, 1]`.
    pub fn new(tolerance: f64, order: f64, safety: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !order.is_finite() || order <= 0.0 {
            return Err(ConfigError::Order);
        }
        if !(safety > 0.0 && safety <= 1.0) {
            return Err(ConfigError::Safety);
        }

        Ok(Self {
            tolerance,
            order,
            safety,
            max_retries: Self::DEFAULT_MAX_RETRIES,
            max_growth: Self::DEFAULT_MAX_GROWTH,
        })
    }

    /// Sets the number of rejections allowed per slot before giving up.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the step growth used when the error estimate vanishes.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_growth` is not finite or is below one.
    pub fn with_max_growth(mut self, max_growth: f64) -> Result<Self, ConfigError> {
        if !max_growth.is_finite() || max_growth < 1.0 {
            return Err(ConfigError::MaxGrowth);
        }
        self.max_growth = max_growth;
        Ok(self)
    }

    /// Returns the error tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the order parameter used as the error exponent divisor.
    #[must_use]
    pub fn order(&self) -> f64 {
        self.order
    }

    /// Returns the safety factor.
    #[must_use]
    pub fn safety(&self) -> f64 {
        self.safety
    }

    /// Returns the maximum number of rejections per slot.
    #[must_use]
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Returns the step growth applied when the error estimate vanishes.
    #[must_use]
    pub fn max_growth(&self) -> f64 {
        self.max_growth
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    tolerance: f64,
    order: f64,
    safety: f64,
    max_retries: usize,
    max_growth: f64,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        Config::default().into()
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            tolerance: config.tolerance,
            order: config.order,
            safety: config.safety,
            max_retries: config.max_retries,
            max_growth: config.max_growth,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.tolerance, raw.order, raw.safety)?
            .with_max_retries(raw.max_retries)
            .with_max_growth(raw.max_growth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.tolerance(), 1e-3);
        assert_eq!(config.order(), 4.0);
        assert_eq!(config.safety(), 0.1);
        assert_eq!(config.max_retries(), Config::DEFAULT_MAX_RETRIES);
        assert_eq!(config.max_growth(), Config::DEFAULT_MAX_GROWTH);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(Config::new(0.0, 4.0, 0.1), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-3, 4.0, 0.1), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 4.0, 0.1), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_bad_order() {
        assert_eq!(Config::new(1e-3, 0.0, 0.1), Err(ConfigError::Order));
        assert_eq!(Config::new(1e-3, f64::INFINITY, 0.1), Err(ConfigError::Order));
    }

    #[test]
    fn safety_must_be_in_unit_interval() {
        assert!(Config::new(1e-3, 4.0, 1.0).is_ok());
        assert_eq!(Config::new(1e-3, 4.0, 0.0), Err(ConfigError::Safety));
        assert_eq!(Config::new(1e-3, 4.0, 1.5), Err(ConfigError::Safety));
        assert_eq!(Config::new(1e-3, 4.0, f64::NAN), Err(ConfigError::Safety));
    }

    #[test]
    fn max_growth_must_not_shrink() {
        let config = Config::default();

        assert_eq!(config.with_max_growth(0.5), Err(ConfigError::MaxGrowth));
        assert_eq!(config.with_max_growth(f64::INFINITY), Err(ConfigError::MaxGrowth));
        assert_eq!(config.with_max_growth(1.0).unwrap().max_growth(), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_toml_with_defaults() {
        let config: Config = toml::from_str("tolerance = 1e-6\nmax_retries = 10\n").unwrap();

        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_retries(), 10);
        assert_eq!(config.order(), 4.0);
        assert_eq!(config.safety(), 0.1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let result: Result<Config, _> = toml::from_str("safety = 2.0\n");

        let message = result.unwrap_err().to_string();
        assert!(message.contains("safety factor"), "{message}");
    }
}
