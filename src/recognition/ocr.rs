use super::{CardRecognizer, RecognitionError};
use crate::ingest::scan_text;

/// An OCR engine that reads raw text from an image.
pub trait TextEngine: Send + Sync {
    fn read_text(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

/// OCR pipeline: read text, then pull rank tokens out of it.
pub struct OcrRecognizer<E> {
    engine: E,
}

impl<E: TextEngine> OcrRecognizer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }
}

impl<E: TextEngine> CardRecognizer for OcrRecognizer<E> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, RecognitionError> {
        let text = self.engine.read_text(image)?;
        log::debug!("OCR recognized text: {text:?}");

        let cards = scan_text(&text);
        if cards.is_empty() {
            return Err(RecognitionError::no_cards_found());
        }
        Ok(cards.iter().map(|c| c.to_display()).collect())
    }
}
