use thiserror::Error;

use crate::recognition::RecognitionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("Invalid card rank: '{0}'")]
    InvalidRank(String),
    #[error("Incomplete hand: {0}")]
    IncompleteHand(&'static str),
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}
