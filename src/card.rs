use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AdvisorError;

/// One of the 13 card ranks. Suits never affect valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack value with the ace counted high.
    pub fn value(&self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ace => 11,
            _ => 10, // Ten, Jack, Queen, King
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Rank::Ace)
    }

    /// Index into the ten strategy columns / pair rows: 2..9 → 0..7, ten-valued → 8, ace → 9.
    pub fn bucket(&self) -> usize {
        match self {
            Rank::Ace => 9,
            other => (other.value() - 2) as usize,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parses an already-normalized rank symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.symbol() == symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_symbol(&s.trim().to_uppercase())
            .ok_or_else(|| AdvisorError::InvalidRank(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Accepts a suit glyph or its initial letter (either case).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Accepts the lowercase suit names used by template labels (`spades`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "spades" => Some(Suit::Spades),
            "hearts" => Some(Suit::Hearts),
            "diamonds" => Some(Suit::Diamonds),
            "clubs" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// A parsed card identifier: a valid rank plus an optional suit carried for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardToken {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl CardToken {
    pub fn new(rank: Rank) -> Self {
        Self { rank, suit: None }
    }

    pub fn with_suit(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    pub fn to_display(&self) -> String {
        match self.suit {
            Some(suit) => format!("{}{}", self.rank, suit.glyph()),
            None => self.rank.to_string(),
        }
    }
}

impl From<Rank> for CardToken {
    fn from(rank: Rank) -> Self {
        CardToken::new(rank)
    }
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl FromStr for CardToken {
    type Err = AdvisorError;

    /// Strict parse: `2-9 | 10 | J | Q | K | A`, case-insensitive, optionally
    /// followed by one suit glyph or suit letter. Anything else is `InvalidRank`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AdvisorError::InvalidRank(s.to_string());
        let normalized = s.trim().to_uppercase();

        let mut chars = normalized.chars();
        let suit = match chars.next_back() {
            Some(last) if normalized.chars().count() > 1 => Suit::from_char(last),
            _ => None,
        };
        let rank_part = if suit.is_some() {
            chars.as_str()
        } else {
            normalized.as_str()
        };

        let rank = Rank::from_symbol(rank_part).ok_or_else(invalid)?;
        Ok(CardToken { rank, suit })
    }
}

impl TryFrom<String> for CardToken {
    type Error = AdvisorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardToken> for String {
    fn from(card: CardToken) -> Self {
        card.to_display()
    }
}

/// Numeric value of a rank token: ace 11, faces 10, digits their face value.
pub fn value_of(token: &str) -> Result<u32, AdvisorError> {
    Ok(token.parse::<CardToken>()?.value())
}
