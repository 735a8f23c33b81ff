mod advice;
mod card;
mod config;
mod error;
mod hand;
pub mod ingest;
pub mod odds;
pub mod recognition;
pub mod strategy;

pub use advice::{advise, advise_manual, advise_table, Advice};
pub use card::{value_of, CardToken, Rank, Suit};
pub use config::RecognitionConfig;
pub use error::AdvisorError;
pub use hand::{calculate_hand_value, evaluate, is_busted, is_pair, is_soft_hand, Hand, HandSummary};
pub use ingest::TableCards;
pub use odds::{estimate_ev, estimate_odds, EvResult, OddsResult};
pub use recognition::{CardRecognizer, RecognitionError, RecognitionErrorKind};
pub use strategy::{classify, Action, DealerUpcard, HandKind, StrategyTable, BASIC_STRATEGY};
