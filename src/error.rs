//! Error types for parsing cards from text.

use thiserror::Error;

/// Errors that can occur when parsing a card or suit from its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not `"Joker"` and does not match `<Rank> of <Suit>s`.
    #[error("card text does not match \"<Rank> of <Suit>s\" or \"Joker\"")]
    Format,
    /// The rank portion is not a known rank name.
    #[error("unknown rank name")]
    UnknownRank,
    /// The suit portion is not a known suit name.
    #[error("unknown suit name")]
    UnknownSuit,
}
