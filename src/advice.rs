use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ingest::{parse_manual, parse_manual_card, TableCards};
use crate::odds::{estimate_ev, estimate_odds, EvResult, OddsResult};
use crate::strategy::{classify, HandKind};
use crate::{evaluate, AdvisorError, CardToken, DealerUpcard, HandSummary};

/// Everything the caller needs to present a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub action: crate::Action,
    pub kind: HandKind,
    pub hand: HandSummary,
    pub dealer: CardToken,
    pub odds: OddsResult,
    pub ev: EvResult,
    pub explanation: String,
}

impl Advice {
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Action: {} ({})", self.action, self.explanation)?;
        writeln!(
            f,
            "Hand:   {}{}{}",
            self.hand.total,
            if self.hand.is_soft { " soft" } else { "" },
            if self.hand.is_pair { " pair" } else { "" }
        )?;
        writeln!(f, "Odds:   {}", self.odds)?;
        write!(f, "EV:     {}", self.ev)
    }
}

fn explain(kind: HandKind, cards: &[CardToken], hand: &HandSummary, dealer: &CardToken) -> String {
    match kind {
        HandKind::Pair => format!("Pair of {}s vs dealer {}", cards[0].rank, dealer.rank),
        HandKind::Soft => format!("Soft {} vs dealer {}", hand.total, dealer.rank),
        HandKind::Hard => format!("Hard {} vs dealer {}", hand.total, dealer.rank),
    }
}

/// Produce the full recommendation bundle for one decision.
pub fn advise(player: &[CardToken], dealer: Option<CardToken>) -> Result<Advice, AdvisorError> {
    let action = classify(player, dealer)?;
    let dealer = dealer.ok_or(AdvisorError::IncompleteHand("no dealer card"))?;
    let upcard = DealerUpcard::from(dealer);

    let hand = evaluate(player);
    let kind = HandKind::of(&hand);

    Ok(Advice {
        action,
        kind,
        hand,
        dealer,
        odds: estimate_odds(&hand, upcard),
        ev: estimate_ev(&hand, upcard),
        explanation: explain(kind, player, &hand, &dealer),
    })
}

/// Manual-entry path: comma-separated player cards plus a dealer card, both strict.
pub fn advise_manual(player: &str, dealer: &str) -> Result<Advice, AdvisorError> {
    let cards = parse_manual(player)?;
    let dealer = if dealer.trim().is_empty() {
        None
    } else {
        Some(parse_manual_card(dealer)?)
    };
    advise(&cards, dealer)
}

/// Recognition path: cards already laid out by [`TableCards::from_recognized`].
pub fn advise_table(table: &TableCards) -> Result<Advice, AdvisorError> {
    advise(&table.player, table.dealer)
}
