//! Settings that shape completion results.

use crate::phonetic::RomanizationStyle;

/// Code-assist settings, usually taken from the client's configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AssistConfig {
    /// Offer control-flow and declaration templates.
    pub include_snippets: bool,
    /// Offer the particles of reachable verbs.
    pub include_particles: bool,
    /// Romanization used for the romanized search key.
    pub romanization: RomanizationStyle,
}

impl AssistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snippets(mut self, enabled: bool) -> Self {
        self.include_snippets = enabled;
        self
    }

    pub fn with_particles(mut self, enabled: bool) -> Self {
        self.include_particles = enabled;
        self
    }

    pub fn with_romanization(mut self, style: RomanizationStyle) -> Self {
        self.romanization = style;
        self
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            include_snippets: true,
            include_particles: true,
            romanization: RomanizationStyle::Hepburn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistConfig::default();

        assert!(config.include_snippets);
        assert!(config.include_particles);
        assert_eq!(config.romanization, RomanizationStyle::Hepburn);
    }

    #[test]
    fn test_builder() {
        let config = AssistConfig::new()
            .with_snippets(false)
            .with_romanization(RomanizationStyle::Kunrei);

        assert!(!config.include_snippets);
        assert!(config.include_particles);
        assert_eq!(config.romanization, RomanizationStyle::Kunrei);
    }
}
