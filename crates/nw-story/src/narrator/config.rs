//! Narrator configuration.

use std::time::Duration;

/// Default pause between rendered characters.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(20);

/// Configuration for the narrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Pause after each rendered character.
    pub char_delay: Duration,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            char_delay: DEFAULT_CHAR_DELAY,
        }
    }
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A config that renders text without pacing.
    pub fn instant() -> Self {
        Self::new().with_char_delay(Duration::ZERO)
    }

    /// Set the per-character delay.
    pub fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    /// Whether text is rendered all at once.
    pub fn is_instant(&self) -> bool {
        self.char_delay.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NarratorConfig::new();
        assert_eq!(config.char_delay, Duration::from_millis(20));
        assert!(!config.is_instant());
    }

    #[test]
    fn builder_pattern() {
        let config = NarratorConfig::new().with_char_delay(Duration::from_millis(5));
        assert_eq!(config.char_delay, Duration::from_millis(5));
    }

    #[test]
    fn instant_has_no_delay() {
        assert!(NarratorConfig::instant().is_instant());
    }
}
