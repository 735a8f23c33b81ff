use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::evaluate;
use crate::{AdvisorError, CardToken, HandSummary, Rank};

mod tables;

use tables::{HARD, HARD_MAX, HARD_MIN, PAIRS, SOFT, SOFT_MAX, SOFT_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    /// Single-letter chart code.
    pub fn code(&self) -> char {
        match self {
            Action::Hit => 'H',
            Action::Stand => 'S',
            Action::Double => 'D',
            Action::Split => 'P',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::Double => "Double",
            Action::Split => "Split",
        };
        f.write_str(name)
    }
}

/// Which of the three charts resolved a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandKind {
    Pair,
    Soft,
    Hard,
}

impl HandKind {
    pub fn of(summary: &HandSummary) -> Self {
        if summary.is_pair {
            HandKind::Pair
        } else if summary.is_soft {
            HandKind::Soft
        } else {
            HandKind::Hard
        }
    }
}

/// The dealer's exposed card. Ten-valued ranks share one chart column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerUpcard(pub CardToken);

impl DealerUpcard {
    pub fn new(card: CardToken) -> Self {
        Self(card)
    }

    pub fn card(&self) -> CardToken {
        self.0
    }

    /// Value with the ace counted as 11.
    pub fn value(&self) -> u32 {
        self.0.value()
    }

    pub fn column(&self) -> usize {
        self.0.rank.bucket()
    }

    /// Chart label: `2`..`9`, `10` or `A`.
    pub fn label(&self) -> &'static str {
        COLUMN_LABELS[self.column()]
    }
}

impl From<CardToken> for DealerUpcard {
    fn from(card: CardToken) -> Self {
        Self(card)
    }
}

impl From<Rank> for DealerUpcard {
    fn from(rank: Rank) -> Self {
        Self(CardToken::new(rank))
    }
}

pub const COLUMN_LABELS: [&str; 10] = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "A"];

/// Immutable hard / soft / pair decision charts.
#[derive(Debug)]
pub struct StrategyTable {
    hard: [[Action; 10]; 17],
    soft: [[Action; 10]; 9],
    pairs: [[Action; 10]; 10],
}

/// Process-wide basic strategy, shared by every request.
pub static BASIC_STRATEGY: StrategyTable = StrategyTable {
    hard: HARD,
    soft: SOFT,
    pairs: PAIRS,
};

impl StrategyTable {
    /// Hard totals below 5 always hit; totals above 21 read as stand.
    pub fn hard(&self, total: u32, upcard: DealerUpcard) -> Action {
        if total < HARD_MIN {
            return Action::Hit;
        }
        let row = (total.min(HARD_MAX) - HARD_MIN) as usize;
        self.hard[row][upcard.column()]
    }

    /// Soft totals below 13 (a lone ace) use the soft 13 row.
    pub fn soft(&self, total: u32, upcard: DealerUpcard) -> Action {
        let row = (total.clamp(SOFT_MIN, SOFT_MAX) - SOFT_MIN) as usize;
        self.soft[row][upcard.column()]
    }

    pub fn pair(&self, rank: Rank, upcard: DealerUpcard) -> Action {
        self.pairs[rank.bucket()][upcard.column()]
    }

    /// Resolve a non-empty hand: pair chart first, then soft, then hard.
    pub fn decide(&self, cards: &[CardToken], upcard: DealerUpcard) -> Action {
        let summary = evaluate(cards);
        match HandKind::of(&summary) {
            HandKind::Pair => self.pair(cards[0].rank, upcard),
            HandKind::Soft => self.soft(summary.total, upcard),
            HandKind::Hard => self.hard(summary.total, upcard),
        }
    }

    pub fn hard_rows(&self) -> impl Iterator<Item = (u32, &[Action; 10])> {
        (HARD_MIN..=HARD_MAX).zip(self.hard.iter())
    }

    pub fn soft_rows(&self) -> impl Iterator<Item = (u32, &[Action; 10])> {
        (SOFT_MIN..=SOFT_MAX).zip(self.soft.iter())
    }

    pub fn pair_rows(&self) -> impl Iterator<Item = (&'static str, &[Action; 10])> {
        COLUMN_LABELS.into_iter().zip(self.pairs.iter())
    }
}

/// Recommend an action for the player's cards against the dealer upcard.
pub fn classify(cards: &[CardToken], dealer: Option<CardToken>) -> Result<Action, AdvisorError> {
    if cards.is_empty() {
        return Err(AdvisorError::IncompleteHand("no player cards"));
    }
    let upcard = dealer
        .map(DealerUpcard::from)
        .ok_or(AdvisorError::IncompleteHand("no dealer card"))?;

    let action = BASIC_STRATEGY.decide(cards, upcard);
    log::debug!(
        "classified [{}] vs {} -> {}",
        cards.iter().map(|c| c.to_display()).collect::<Vec<_>>().join(","),
        upcard.label(),
        action
    );
    Ok(action)
}

#[cfg(test)]
mod tests;
