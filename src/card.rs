//! Card types and rendering.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// The four standard suits are ordered Spade, Diamond, Club, Heart; this
/// order drives the default deck ordering. [`Suit::Joker`] is a sentinel
/// marking a card outside the standard 52 and is not a playing suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker sentinel suit.
    Joker,
}

/// The four standard suits, in default deck order.
pub const STANDARD_SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spade" => Ok(Self::Spade),
            "Diamond" => Ok(Self::Diamond),
            "Club" => Ok(Self::Club),
            "Heart" => Ok(Self::Heart),
            "Joker" => Ok(Self::Joker),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

/// Rank value of an Ace.
pub const ACE: u8 = 1;
/// Rank value of a Two.
pub const TWO: u8 = 2;
/// Rank value of a Three.
pub const THREE: u8 = 3;
/// Rank value of a Four.
pub const FOUR: u8 = 4;
/// Rank value of a Five.
pub const FIVE: u8 = 5;
/// Rank value of a Six.
pub const SIX: u8 = 6;
/// Rank value of a Seven.
pub const SEVEN: u8 = 7;
/// Rank value of an Eight.
pub const EIGHT: u8 = 8;
/// Rank value of a Nine.
pub const NINE: u8 = 9;
/// Rank value of a Ten.
pub const TEN: u8 = 10;
/// Rank value of a Jack.
pub const JACK: u8 = 11;
/// Rank value of a Queen.
pub const QUEEN: u8 = 12;
/// Rank value of a King.
pub const KING: u8 = 13;

/// Lowest standard rank.
pub const MIN_RANK: u8 = ACE;
/// Highest standard rank.
pub const MAX_RANK: u8 = KING;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

const fn rank_name(rank: u8) -> Option<&'static str> {
    Some(match rank {
        1 => "Ace",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => return None,
    })
}

fn rank_from_name(name: &str) -> Option<u8> {
    Some(match name {
        "Ace" => ACE,
        "Two" => TWO,
        "Three" => THREE,
        "Four" => FOUR,
        "Five" => FIVE,
        "Six" => SIX,
        "Seven" => SEVEN,
        "Eight" => EIGHT,
        "Nine" => NINE,
        "Ten" => TEN,
        "Jack" => JACK,
        "Queen" => QUEEN,
        "King" => KING,
        _ => return None,
    })
}

/// A playing card.
///
/// Two cards with equal suit and rank are interchangeable; a card has no
/// identity beyond its field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// On a [`Suit::Joker`] card the field holds a distinguishing index
    /// instead of a playable rank.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// on a standard suit are accepted but render as `Rank(<n>)` and may sort
    /// outside their suit's range.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    /// Renders the card for display.
    ///
    /// Jokers render as the bare suit name; standard cards render as
    /// `<Rank> of <Suit>s`, e.g. `Ace of Spades`. The exact text is part of
    /// the observable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(self.suit.name());
        }
        match rank_name(self.rank) {
            Some(name) => write!(f, "{} of {}s", name, self.suit),
            None => write!(f, "Rank({}) of {}s", self.rank, self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form back into a card.
    ///
    /// `"Joker"` parses as the joker with index 0; everything else must
    /// match `<Rank> of <Suit>s` exactly, with a standard suit. A joker can
    /// only be produced by the bare `"Joker"` form, so `"Ace of Jokers"` is
    /// rejected rather than collapsing into a sentinel card that would not
    /// render back to its input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Joker" {
            return Ok(Self::new(Suit::Joker, 0));
        }

        let (rank_text, suit_text) = s.split_once(" of ").ok_or(ParseCardError::Format)?;
        let suit_text = suit_text.strip_suffix('s').ok_or(ParseCardError::Format)?;

        let rank = rank_from_name(rank_text).ok_or(ParseCardError::UnknownRank)?;
        let suit: Suit = suit_text.parse()?;
        if matches!(suit, Suit::Joker) {
            return Err(ParseCardError::UnknownSuit);
        }

        Ok(Self::new(suit, rank))
    }
}
