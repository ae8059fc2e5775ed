//! Validated configuration for swipe-to-reveal rows.

use crate::gesture_constants::{REVEAL_PANEL_WIDTH, SWIPE_THRESHOLD};

/// Reasons a [`SwipeConfig`] value was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The swipe threshold was zero, negative, or not finite.
    InvalidThreshold { value: f32 },
    /// The reveal panel width was zero, negative, or not finite.
    InvalidRevealWidth { value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidThreshold { value } => {
                write!(f, "swipe threshold must be a positive finite distance, got {value}")
            }
            ConfigError::InvalidRevealWidth { value } => {
                write!(f, "reveal panel width must be a positive finite distance, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Per-row gesture settings.
///
/// Fields are private so an invalid configuration cannot be constructed;
/// use [`SwipeConfig::default`] and the `with_*` builders.
///
/// ```
/// use swipekit_foundation::SwipeConfig;
///
/// let config = SwipeConfig::default()
///     .with_threshold(64.0)
///     .and_then(|config| config.with_reveal_width(96.0))
///     .expect("valid config");
/// assert_eq!(config.threshold(), 64.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    threshold: f32,
    reveal_width: f32,
}

impl SwipeConfig {
    /// Creates a configuration with the given threshold and the default panel width.
    pub fn new(threshold: f32) -> Result<Self, ConfigError> {
        Self::default().with_threshold(threshold)
    }

    /// Sets the swipe threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, ConfigError> {
        if !is_positive_distance(threshold) {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Sets the width of the revealed action panel.
    pub fn with_reveal_width(mut self, width: f32) -> Result<Self, ConfigError> {
        if !is_positive_distance(width) {
            return Err(ConfigError::InvalidRevealWidth { value: width });
        }
        self.reveal_width = width;
        Ok(self)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn reveal_width(&self) -> f32 {
        self.reveal_width
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: SWIPE_THRESHOLD,
            reveal_width: REVEAL_PANEL_WIDTH,
        }
    }
}

fn is_positive_distance(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_gesture_constants() {
        let config = SwipeConfig::default();
        assert_eq!(config.threshold(), SWIPE_THRESHOLD);
        assert_eq!(config.reveal_width(), REVEAL_PANEL_WIDTH);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        assert_eq!(
            SwipeConfig::new(0.0),
            Err(ConfigError::InvalidThreshold { value: 0.0 })
        );
        assert!(SwipeConfig::new(-5.0).is_err());
        assert!(SwipeConfig::new(f32::INFINITY).is_err());
        assert!(SwipeConfig::new(f32::NAN).is_err());
    }

    #[test]
    fn rejects_non_positive_reveal_width() {
        let err = SwipeConfig::default()
            .with_reveal_width(-80.0)
            .expect_err("negative width");
        assert_eq!(err, ConfigError::InvalidRevealWidth { value: -80.0 });
        assert!(err.to_string().contains("reveal panel width"));
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = SwipeConfig::default()
            .with_reveal_width(120.0)
            .and_then(|config| config.with_threshold(30.0))
            .expect("valid config");
        assert_eq!(config.threshold(), 30.0);
        assert_eq!(config.reveal_width(), 120.0);
    }
}
