//! Heuristic win/push/loss odds and per-action expected value.
//!
//! Fixed approximations, not a shoe simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DealerUpcard, HandSummary};

/// Dealer bust probability by upcard column `2..9, 10, A`.
const DEALER_BUST: [f64; 10] = [0.35, 0.37, 0.40, 0.42, 0.42, 0.26, 0.24, 0.23, 0.21, 0.17];

const PUSH: f64 = 0.08;
/// Win probability for a busted player hand.
const BUSTED_WIN: f64 = 0.42;
const HIT_GAIN: f64 = 0.1;
const DOUBLE_FACTOR: f64 = 1.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsResult {
    pub win: f64,
    pub push: f64,
    pub loss: f64,
    pub dealer_bust: f64,
}

impl fmt::Display for OddsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win: {} | Push: {} | Lose: {} | Dealer bust: {}",
            percent(self.win),
            percent(self.push),
            percent(self.loss),
            percent(self.dealer_bust)
        )
    }
}

/// Expected return per unit wagered, per action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvResult {
    pub hit: f64,
    pub stand: f64,
    pub double: f64,
}

impl fmt::Display for EvResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hit EV: {} | Stand EV: {} | Double EV: {}",
            signed(self.hit),
            signed(self.stand),
            signed(self.double)
        )
    }
}

/// Formats a probability as a percentage with one decimal.
pub fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Formats an EV with three decimals and a `+` for positive values.
pub fn signed(ev: f64) -> String {
    if ev > 0.0 {
        format!("+{ev:.3}")
    } else {
        format!("{ev:.3}")
    }
}

pub fn dealer_bust_probability(upcard: DealerUpcard) -> f64 {
    DEALER_BUST[upcard.column()]
}

fn win_probability(total: u32, dealer_bust: f64) -> f64 {
    match total {
        0..=11 => 0.50,
        12..=16 => 0.35 + 0.3 * dealer_bust,
        17..=21 => 0.45 + 0.5 * dealer_bust,
        _ => BUSTED_WIN,
    }
}

pub fn estimate_odds(hand: &HandSummary, upcard: DealerUpcard) -> OddsResult {
    let dealer_bust = dealer_bust_probability(upcard);
    let win = win_probability(hand.total, dealer_bust);
    OddsResult {
        win,
        push: PUSH,
        loss: 1.0 - win - PUSH,
        dealer_bust,
    }
}

/// Bust chance on the next card, `(total - 11) / 13` from 12 up. Not clamped above 1.
fn hit_bust_probability(total: u32) -> f64 {
    if total >= 12 {
        ((f64::from(total) - 11.0) / 13.0).max(0.0)
    } else {
        0.0
    }
}

pub fn estimate_ev(hand: &HandSummary, upcard: DealerUpcard) -> EvResult {
    let dealer_bust = dealer_bust_probability(upcard);

    let stand = if hand.is_busted() {
        -1.0
    } else {
        let bonus = if hand.total >= 17 { 0.2 } else { 0.1 };
        let win = dealer_bust + bonus;
        win - (1.0 - win)
    };

    let bust = hit_bust_probability(hand.total);
    let hit = (1.0 - bust) * HIT_GAIN - bust;

    EvResult {
        hit,
        stand,
        double: hit * DOUBLE_FACTOR,
    }
}
