//! Deck construction and composable transforms.
//!
//! A deck starts as the canonical 52 cards and is piped through a chain of
//! [`Transform`]s, each taking the deck produced by the previous stage and
//! returning the deck for the next one.

use alloc::boxed::Box;
use alloc::vec::Vec;

use core::cmp::Ordering;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, STANDARD_SUITS, Suit};
use crate::sync::Mutex;

/// An ordered sequence of cards.
///
/// Insertion order is significant (it defines deal and display order) and
/// duplicates are permitted.
pub type Deck = Vec<Card>;

/// A composable deck transformation.
///
/// Transforms take the current deck by value and return the deck for the
/// next stage, so no stage can observe aliasing from another. Boxed so that
/// factories with captured state (a predicate, an RNG) compose uniformly in
/// one pipeline.
pub type Transform = Box<dyn FnMut(Deck) -> Deck>;

/// An index comparator over a specific deck snapshot.
///
/// `less(i, j)` reports whether the element at position `i` is ordered
/// strictly before the element at position `j`.
pub type LessFn<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Builds a new deck of cards.
///
/// The deck starts as the canonical 52 cards, one per standard suit and
/// rank, suit-major (Spades, Diamonds, Clubs, Hearts) and rank-minor (Ace
/// through King). Each transform is then applied in the order given, each
/// feeding its output to the next. With no transforms the canonical ordered
/// deck is returned as-is.
///
/// # Example
///
/// ```
/// use deckrs::deck;
///
/// let cards = deck::new([deck::jokers(2), deck::shuffle_seeded(42)]);
/// assert_eq!(cards.len(), 54);
/// ```
#[must_use]
pub fn new(transforms: impl IntoIterator<Item = Transform>) -> Deck {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in STANDARD_SUITS {
        for rank in MIN_RANK..=MAX_RANK {
            deck.push(Card::new(suit, rank));
        }
    }

    for mut transform in transforms {
        deck = transform(deck);
    }

    deck
}

/// A unique position for a card in the default ordering.
///
/// Multiplying the suit index by one more than the rank count gives every
/// suit a disjoint range (Spades 1..=13, Diamonds 15..=27, and so on), so
/// cards from different suits never collide. [`Suit::Joker`] has suit
/// index 4 and its indices start at 56, strictly above the King of Hearts
/// at 55, so jokers order after all 52 standard cards, among themselves by
/// their distinguishing index.
const fn abs_rank(card: Card) -> usize {
    card.suit as usize * (MAX_RANK as usize + 1) + card.rank as usize
}

/// Returns the default index comparator for `cards`.
///
/// Orders by absolute rank: suit-major in Spade, Diamond, Club, Heart
/// order, rank-minor within each suit, jokers last. Exposed so custom
/// [`sort_with`] criteria can delegate to or invert the default ordering.
#[must_use]
pub fn less(cards: &[Card]) -> LessFn<'_> {
    Box::new(move |i, j| abs_rank(cards[i]) < abs_rank(cards[j]))
}

/// Transform that sorts the deck into the default order.
///
/// The result is all Spades Ace through King, then Diamonds, Clubs, and
/// Hearts, with any jokers at the end in index order. The sort is stable,
/// so equal cards keep their relative insertion order, and sorting is
/// idempotent.
#[must_use]
pub fn default_sort() -> Transform {
    Box::new(|mut cards: Deck| {
        cards.sort_by_key(|&card| abs_rank(card));
        cards
    })
}

/// Transform that sorts the deck with a caller-supplied ordering.
///
/// `make_less` is invoked against the deck that is actually being sorted,
/// never a snapshot captured when the transform was constructed, and must
/// return an index comparator for it. The comparator is applied with a
/// stable sort, so ties keep insertion order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, LessFn, deck};
///
/// fn by_rank(cards: &[Card]) -> LessFn<'_> {
///     Box::new(move |i, j| cards[i].rank < cards[j].rank)
/// }
///
/// let cards = deck::new([deck::sort_with(by_rank)]);
/// // All four aces sort to the front.
/// assert!(cards[..4].iter().all(|card| card.rank == 1));
/// ```
#[must_use]
pub fn sort_with<L>(make_less: L) -> Transform
where
    L: for<'a> Fn(&'a [Card]) -> LessFn<'a> + 'static,
{
    Box::new(move |cards: Deck| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        {
            let is_less = make_less(&cards);
            order.sort_by(|&i, &j| {
                if is_less(i, j) {
                    Ordering::Less
                } else if is_less(j, i) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
        }
        order.into_iter().map(|i| cards[i]).collect()
    })
}

/// Process-wide RNG backing [`shuffle`], created on first use.
static SHUFFLE_RNG: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

#[cfg(feature = "std")]
fn fresh_rng() -> ChaCha8Rng {
    use std::time::{SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn fresh_rng() -> ChaCha8Rng {
    // No clock to draw from without std; see `seed_shuffle`.
    ChaCha8Rng::seed_from_u64(0)
}

fn with_shuffle_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut slot = SHUFFLE_RNG.lock();
    f(slot.get_or_insert_with(fresh_rng))
}

/// Seeds the process-wide RNG used by [`shuffle`].
///
/// Useful for reproducing a whole sequence of shuffles, and the only way to
/// vary shuffles in `no_std` builds, where the RNG otherwise starts from a
/// fixed seed of 0.
pub fn seed_shuffle(seed: u64) {
    *SHUFFLE_RNG.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
}

/// Transform that rearranges the deck into a uniformly random permutation.
///
/// Uses the process-wide RNG, seeded from the system clock (whole seconds)
/// the first time any shuffle runs. Separate processes started within the
/// same second therefore see the same sequence of shuffles; within one
/// process the RNG state advances, so repeated shuffles differ. For
/// reproducible results use [`shuffle_seeded`] or [`shuffle_with`].
///
/// The output is always a permutation of the input: same cards, same
/// counts, same length.
#[must_use]
pub fn shuffle() -> Transform {
    Box::new(|mut cards: Deck| {
        with_shuffle_rng(|rng| cards.shuffle(rng));
        cards
    })
}

/// Transform that shuffles with a caller-owned generator.
///
/// This is the deterministic path: construct the generator yourself and
/// decide the seed source. The generator is owned by the transform, so
/// concurrent pipelines never contend on shared RNG state.
///
/// # Example
///
/// ```
/// use deckrs::deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let rng = ChaCha8Rng::seed_from_u64(7);
/// let a = deck::new([deck::shuffle_with(rng.clone())]);
/// let b = deck::new([deck::shuffle_with(rng)]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_with<R: Rng + 'static>(mut rng: R) -> Transform {
    Box::new(move |mut cards: Deck| {
        cards.shuffle(&mut rng);
        cards
    })
}

/// Transform that shuffles with a fresh ChaCha8 generator seeded from
/// `seed`. Shorthand for [`shuffle_with`].
#[must_use]
pub fn shuffle_seeded(seed: u64) -> Transform {
    shuffle_with(ChaCha8Rng::seed_from_u64(seed))
}

/// Transform that appends `n` jokers to the end of the deck.
///
/// Each joker's rank field holds its position among the added jokers (0,
/// 1, ..) purely to keep them distinguishable from one another; it carries
/// no ranking semantics. Existing cards are neither removed nor reordered.
/// Counts above 255 wrap the index, since the rank field is a byte.
#[must_use]
pub fn jokers(n: usize) -> Transform {
    Box::new(move |mut cards: Deck| {
        cards.reserve(n);
        for i in 0..n {
            cards.push(Card::new(Suit::Joker, i as u8));
        }
        cards
    })
}

/// Transform that removes every card matching `predicate`.
///
/// The predicate expresses "should be removed": cards for which it returns
/// `true` are dropped, and the survivors keep their original relative
/// order. A predicate matching every card yields an empty deck, not an
/// error.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, deck};
///
/// let cards = deck::new([deck::jokers(2), deck::filter(|card| card.suit == Suit::Joker)]);
/// assert_eq!(cards.len(), 52);
/// ```
#[must_use]
pub fn filter<F>(predicate: F) -> Transform
where
    F: Fn(&Card) -> bool + 'static,
{
    Box::new(move |mut cards: Deck| {
        cards.retain(|card| !predicate(card));
        cards
    })
}

/// Transform that replaces the deck with `n` back-to-back copies of itself.
///
/// The result is the original sequence followed by `n - 1` identical
/// repeats, each copy internally in the original order. Zero yields an
/// empty deck; one is an allocating identity.
///
/// # Example
///
/// ```
/// use deckrs::deck;
///
/// let double = deck::new([deck::decks(2)]);
/// assert_eq!(double.len(), 104);
/// assert_eq!(&double[..52], &double[52..]);
/// ```
#[must_use]
pub fn decks(n: usize) -> Transform {
    Box::new(move |cards: Deck| cards.repeat(n))
}
