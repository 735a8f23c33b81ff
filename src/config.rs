use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the image recognition boundary. The blackjack rules themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Deadline for a single recognition call, in milliseconds
    pub timeout_ms: u64,

    /// Template matches must score strictly above this to count as a card
    pub min_template_confidence: f32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            min_template_confidence: 0.7,
        }
    }
}

impl RecognitionConfig {
    /// Fewer false positives, more missed cards
    pub fn strict() -> Self {
        Self {
            min_template_confidence: 0.85,
            ..Self::default()
        }
    }

    /// For low-resolution captures
    pub fn lenient() -> Self {
        Self {
            timeout_ms: 20_000,
            min_template_confidence: 0.5,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
