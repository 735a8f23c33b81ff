//! Turns typed text and recognizer output into [`CardToken`]s.
//!
//! Manual entry is strict: one bad token rejects the whole entry. Recognizer
//! output is noisy, so bad tokens are dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{AdvisorError, CardToken, Rank, Suit};

static CARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(10|[2-9JQKA])([♠♥♦♣])?").expect("card pattern is valid")
});

/// Parse a comma-separated manual entry such as `"10, K, a"`.
pub fn parse_manual(input: &str) -> Result<Vec<CardToken>, AdvisorError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_uppercase().parse())
        .collect()
}

/// Parse a single manually entered card (the dealer field).
pub fn parse_manual_card(input: &str) -> Result<CardToken, AdvisorError> {
    input.trim().to_uppercase().parse()
}

/// Normalize tokens handed over by a recognizer, silently dropping anything
/// outside the rank alphabet.
pub fn normalize_recognized<I, S>(tokens: I) -> Vec<CardToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref();
            match token.trim().to_uppercase().parse() {
                Ok(card) => Some(card),
                Err(_) => {
                    log::debug!("dropping unrecognized token {token:?}");
                    None
                }
            }
        })
        .collect()
}

/// Extract card tokens, in reading order, from raw OCR text.
pub fn scan_text(text: &str) -> Vec<CardToken> {
    CARD_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let rank: Rank = caps.get(1)?.as_str().parse().ok()?;
            let suit = caps
                .get(2)
                .and_then(|m| m.as_str().chars().next())
                .and_then(Suit::from_char);
            Some(CardToken { rank, suit })
        })
        .collect()
}

/// Recognized cards split by the table convention: the last card of two or
/// more is the dealer upcard, everything before it is the player's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCards {
    pub player: Vec<CardToken>,
    pub dealer: Option<CardToken>,
}

impl TableCards {
    pub fn from_recognized(mut cards: Vec<CardToken>) -> Self {
        let dealer = if cards.len() >= 2 { cards.pop() } else { None };
        Self {
            player: cards,
            dealer,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.player.is_empty() && self.dealer.is_some()
    }
}
