//! Fixed hand layouts read from text: one hand per line, cards separated by commas.
//!
//! ```text
//! 10D, JD, QD, KD, AD
//! 9H, 10H, JH, QH, KH
//! ```

use crate::cards::{Card, CardParseError};
use crate::hand::{Hand, HandError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Card {
        line: usize,
        #[source]
        source: CardParseError,
    },
    #[error("duplicated card found in deck: {0}")]
    DuplicateCard(Card),
    #[error("line {line}: {source}")]
    Hand {
        line: usize,
        #[source]
        source: HandError,
    },
    #[error("expected {expected} hands, found {found}")]
    MissingHands { expected: usize, found: usize },
}

/// Hands read from a layout, plus the raw text lines for echoing.
#[derive(Debug, Clone)]
pub struct Layout {
    pub lines: Vec<String>,
    pub hands: Vec<Hand>,
}

/// Parse the first `hands` lines of `text` as hands.
///
/// Later lines are kept in [`Layout::lines`] but not parsed. A card may appear only
/// once across the whole layout.
///
/// ```
/// use stud_rs::layout::parse_layout;
///
/// let layout = parse_layout("10D, JD, QD, KD, AD\n2C, 3C, 4C, 5C, 7H\n", 2).unwrap();
/// assert_eq!(layout.hands.len(), 2);
/// ```
pub fn parse_layout(text: &str, hands: usize) -> Result<Layout, LayoutError> {
    let lines: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
    if lines.len() < hands {
        return Err(LayoutError::MissingHands { expected: hands, found: lines.len() });
    }

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(hands);
    for (i, line) in lines.iter().take(hands).enumerate() {
        let line_no = i + 1;
        let mut cards = Vec::new();
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let card = Card::from_str(token)
                .map_err(|source| LayoutError::Card { line: line_no, source })?;
            if !seen.insert(card) {
                return Err(LayoutError::DuplicateCard(card));
            }
            cards.push(card);
        }
        let hand = Hand::from_slice(&cards)
            .map_err(|source| LayoutError::Hand { line: line_no, source })?;
        out.push(hand);
    }

    log::debug!("parsed {} hands from {} layout lines", out.len(), lines.len());
    Ok(Layout { lines, hands: out })
}

/// Read a layout file's text, to be echoed and then handed to [`parse_layout`].
pub fn read_text(path: impl AsRef<Path>) -> Result<String, LayoutError> {
    let path = path.as_ref();
    log::info!("reading hand layout from {}", path.display());
    fs::read_to_string(path).map_err(|source| LayoutError::Io { path: path.to_path_buf(), source })
}
