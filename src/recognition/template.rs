use serde::{Deserialize, Serialize};

use super::{CardRecognizer, RecognitionError};
use crate::{CardToken, Rank, RecognitionConfig, Suit};

/// One candidate card region matched against the template set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMatch {
    /// Template name, `<rank>_<suit>` such as `A_spades` or `10_hearts`
    pub label: String,
    pub confidence: f32,
}

/// Finds card-shaped regions and scores them against card templates.
pub trait TemplateDetector: Send + Sync {
    fn detect(&self, image: &[u8]) -> Result<Vec<TemplateMatch>, RecognitionError>;
}

/// Template-matching pipeline with a confidence cutoff.
pub struct TemplateRecognizer<D> {
    detector: D,
    min_confidence: f32,
}

impl<D: TemplateDetector> TemplateRecognizer<D> {
    pub fn new(detector: D) -> Self {
        Self::with_config(detector, &RecognitionConfig::default())
    }

    pub fn with_config(detector: D, config: &RecognitionConfig) -> Self {
        Self {
            detector,
            min_confidence: config.min_template_confidence,
        }
    }
}

/// Map a template label to a card. Unknown labels yield `None`.
fn card_from_label(label: &str) -> Option<CardToken> {
    let (rank, suit) = label.split_once('_')?;
    let rank: Rank = rank.parse().ok()?;
    Some(CardToken {
        rank,
        suit: Suit::from_name(suit),
    })
}

impl<D: TemplateDetector> CardRecognizer for TemplateRecognizer<D> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError> {
        let matches = self.detector.detect(image)?;
        let total = matches.len();

        let cards: Vec<String> = matches
            .into_iter()
            .filter(|m| m.confidence > self.min_confidence)
            .filter_map(|m| card_from_label(&m.label))
            .map(|c| c.to_display())
            .collect();

        log::debug!("template matching kept {} of {} regions", cards.len(), total);
        if cards.is_empty() {
            return Err(RecognitionError::no_cards_found());
        }
        Ok(cards)
    }
}
