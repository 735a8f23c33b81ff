use serde::{Deserialize, Serialize};

use crate::CardToken;

/// Derived shape of a hand. Always recomputed from the live cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandSummary {
    pub total: u32,
    pub is_soft: bool,
    pub is_pair: bool,
}

impl HandSummary {
    pub const EMPTY: Self = Self {
        total: 0,
        is_soft: false,
        is_pair: false,
    };

    pub fn is_busted(&self) -> bool {
        self.total > 21
    }
}

/// Hand total plus the number of aces still counted as 11.
fn total_and_high_aces(cards: &[CardToken]) -> (u32, u32) {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        total += card.value();
    }

    // Devalue aces one at a time while busting
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces)
}

/// Calculate the value of a blackjack hand
pub fn calculate_hand_value(cards: &[CardToken]) -> u32 {
    total_and_high_aces(cards).0
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[CardToken]) -> bool {
    let (total, aces) = total_and_high_aces(cards);
    aces > 0 && total <= 21
}

/// Check if a hand is busted
pub fn is_busted(cards: &[CardToken]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Exactly two cards of the same rank. K+Q is not a pair.
pub fn is_pair(cards: &[CardToken]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

/// Evaluate a card sequence. The empty hand evaluates to [`HandSummary::EMPTY`].
pub fn evaluate(cards: &[CardToken]) -> HandSummary {
    if cards.is_empty() {
        return HandSummary::EMPTY;
    }

    let (total, aces) = total_and_high_aces(cards);
    HandSummary {
        total,
        is_soft: aces > 0 && total <= 21,
        is_pair: is_pair(cards),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<CardToken>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<CardToken>) -> Self {
        Self { cards }
    }

    pub fn value(&self) -> u32 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: CardToken) {
        self.cards.push(card);
    }

    pub fn summary(&self) -> HandSummary {
        evaluate(&self.cards)
    }
}
