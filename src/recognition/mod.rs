//! The image → card-token capability consumed at the ingestion boundary.
//!
//! OCR and template matching are two implementations of the same
//! [`CardRecognizer`] contract. Neither is retried here; failures are handed
//! back to the caller, which may fall back to manual entry.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ingest::{normalize_recognized, TableCards};
use crate::RecognitionConfig;

mod ocr;
mod template;

pub use ocr::{OcrRecognizer, TextEngine};
pub use template::{TemplateDetector, TemplateMatch, TemplateRecognizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecognitionErrorKind {
    Unavailable,
    Timeout,
    NoCardsFound,
}

impl fmt::Display for RecognitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecognitionErrorKind::Unavailable => "recognition unavailable",
            RecognitionErrorKind::Timeout => "recognition timed out",
            RecognitionErrorKind::NoCardsFound => "no cards found",
        };
        f.write_str(name)
    }
}

/// A recognition failure: what kind, plus optional technical detail.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}{}", .kind, detail_suffix(.detail))]
pub struct RecognitionError {
    pub kind: RecognitionErrorKind,
    pub detail: Option<String>,
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl RecognitionError {
    pub fn new(kind: RecognitionErrorKind) -> Self {
        Self { kind, detail: None }
    }

    pub fn with_detail(kind: RecognitionErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::with_detail(RecognitionErrorKind::Unavailable, detail)
    }

    pub fn timeout(after: Duration) -> Self {
        Self::with_detail(
            RecognitionErrorKind::Timeout,
            format!("no result after {}ms", after.as_millis()),
        )
    }

    pub fn no_cards_found() -> Self {
        Self::new(RecognitionErrorKind::NoCardsFound)
    }
}

/// Turns captured image bytes into raw card tokens, in table reading order.
pub trait CardRecognizer: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError>;
}

impl<R: CardRecognizer + ?Sized> CardRecognizer for Arc<R> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError> {
        (**self).recognize(image)
    }
}

impl<R: CardRecognizer + ?Sized> CardRecognizer for Box<R> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError> {
        (**self).recognize(image)
    }
}

fn into_table(tokens: Vec<String>) -> Result<TableCards, RecognitionError> {
    let cards = normalize_recognized(&tokens);
    if cards.is_empty() {
        return Err(RecognitionError::with_detail(
            RecognitionErrorKind::NoCardsFound,
            format!("{} raw tokens, none valid", tokens.len()),
        ));
    }
    Ok(TableCards::from_recognized(cards))
}

/// Recognize an image and lay the valid cards out as player hand + dealer upcard.
pub fn recognize_table<R>(recognizer: &R, image: &[u8]) -> Result<TableCards, RecognitionError>
where
    R: CardRecognizer + ?Sized,
{
    let tokens = recognizer.recognize(image).map_err(|e| {
        log::warn!("card recognition failed: {e}");
        e
    })?;
    into_table(tokens)
}

/// Run a blocking recognizer off the async executor, bounded by `timeout`.
pub async fn recognize_with_timeout<R>(
    recognizer: Arc<R>,
    image: Vec<u8>,
    timeout: Duration,
) -> Result<TableCards, RecognitionError>
where
    R: CardRecognizer + ?Sized + 'static,
{
    let task = tokio::task::spawn_blocking(move || recognizer.recognize(&image));

    let tokens = match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(RecognitionError::unavailable(format!(
            "recognizer task failed: {join_err}"
        ))),
        Err(_) => Err(RecognitionError::timeout(timeout)),
    }
    .map_err(|e| {
        log::warn!("card recognition failed: {e}");
        e
    })?;

    into_table(tokens)
}

/// [`recognize_with_timeout`] using the configured deadline.
pub async fn recognize_with_config<R>(
    recognizer: Arc<R>,
    image: Vec<u8>,
    config: &RecognitionConfig,
) -> Result<TableCards, RecognitionError>
where
    R: CardRecognizer + ?Sized + 'static,
{
    recognize_with_timeout(recognizer, image, config.timeout()).await
}
