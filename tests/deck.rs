//! Deck construction and transform integration tests.

use deckrs::{Card, DECK_SIZE, LessFn, ParseCardError, Suit, card, deck};

fn canonical() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

#[test]
fn new_builds_canonical_deck() {
    let cards = deck::new([]);

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards, canonical());
    assert_eq!(cards[0].to_string(), "Ace of Spades");
    assert_eq!(cards[12].to_string(), "King of Spades");
    assert_eq!(cards[13].to_string(), "Ace of Diamonds");
    assert_eq!(cards[51].to_string(), "King of Hearts");
}

#[test]
fn default_sort_restores_canonical_order() {
    let shuffled = deck::new([deck::shuffle_seeded(3)]);
    assert_ne!(shuffled, canonical());

    let sorted = deck::new([deck::shuffle_seeded(3), deck::default_sort()]);
    assert_eq!(sorted, canonical());

    let twice = deck::new([
        deck::shuffle_seeded(3),
        deck::default_sort(),
        deck::default_sort(),
    ]);
    assert_eq!(twice, sorted);
}

#[test]
fn default_sort_places_jokers_last() {
    let cards = deck::new([
        deck::jokers(2),
        deck::shuffle_seeded(9),
        deck::default_sort(),
    ]);

    assert_eq!(cards.len(), 54);
    assert_eq!(cards[..52], canonical());
    assert_eq!(cards[52], Card::new(Suit::Joker, 0));
    assert_eq!(cards[53], Card::new(Suit::Joker, 1));
}

#[test]
fn default_sort_orders_joker_after_king_of_hearts() {
    let mut sort = deck::default_sort();
    let cards = sort(vec![
        Card::new(Suit::Joker, 0),
        Card::new(Suit::Heart, card::KING),
    ]);

    assert_eq!(
        cards,
        vec![Card::new(Suit::Heart, card::KING), Card::new(Suit::Joker, 0)]
    );
}

#[test]
fn shuffle_seeded_is_a_permutation() {
    let shuffled = deck::new([deck::shuffle_seeded(42)]);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_ne!(shuffled, canonical());

    let restored = deck::new([deck::shuffle_seeded(42), deck::default_sort()]);
    assert_eq!(restored, canonical());
}

#[test]
fn shuffles_with_different_seeds_differ() {
    let a = deck::new([deck::shuffle_seeded(1)]);
    let b = deck::new([deck::shuffle_seeded(2)]);
    assert_ne!(a, b);
}

#[test]
fn seeded_global_shuffle_is_reproducible() {
    deck::seed_shuffle(7);
    let a = deck::new([deck::shuffle()]);
    // Consecutive shuffles advance the generator state.
    let b = deck::new([deck::shuffle()]);
    assert_ne!(a, b);

    deck::seed_shuffle(7);
    assert_eq!(deck::new([deck::shuffle()]), a);
    assert_eq!(deck::new([deck::shuffle()]), b);
}

#[test]
fn jokers_appends_distinguishable_jokers() {
    let cards = deck::new([deck::jokers(3)]);

    assert_eq!(cards.len(), 55);
    assert_eq!(cards[..52], canonical());
    assert_eq!(cards[52], Card::new(Suit::Joker, 0));
    assert_eq!(cards[53], Card::new(Suit::Joker, 1));
    assert_eq!(cards[54], Card::new(Suit::Joker, 2));
}

#[test]
fn filter_removes_matching_cards() {
    let no_jokers = deck::new([deck::jokers(2), deck::filter(|c| c.is_joker())]);
    assert_eq!(no_jokers, canonical());

    let empty = deck::new([deck::filter(|_| true)]);
    assert!(empty.is_empty());
}

#[test]
fn filter_keeps_survivors_in_original_order() {
    let cards = deck::new([deck::filter(|c| c.suit == Suit::Diamond)]);

    assert_eq!(cards.len(), 39);
    let expected: Vec<Card> = canonical()
        .into_iter()
        .filter(|c| c.suit != Suit::Diamond)
        .collect();
    assert_eq!(cards, expected);
}

#[test]
fn decks_multiplies_the_deck() {
    let tripled = deck::new([deck::decks(3)]);

    assert_eq!(tripled.len(), 3 * DECK_SIZE);
    assert_eq!(tripled[..52], canonical());
    assert_eq!(tripled[52..104], canonical());
    assert_eq!(tripled[104..], canonical());

    assert!(deck::new([deck::decks(0)]).is_empty());
    assert_eq!(deck::new([deck::decks(1)]), canonical());
}

#[test]
fn sort_with_default_less_matches_default_sort() {
    let custom = deck::new([deck::shuffle_seeded(5), deck::sort_with(deck::less)]);
    let default = deck::new([deck::shuffle_seeded(5), deck::default_sort()]);
    assert_eq!(custom, default);
}

fn descending(cards: &[Card]) -> LessFn<'_> {
    let default = deck::less(cards);
    Box::new(move |i, j| default(j, i))
}

#[test]
fn sort_with_supports_custom_orderings() {
    let cards = deck::new([deck::shuffle_seeded(8), deck::sort_with(descending)]);

    let mut expected = canonical();
    expected.reverse();
    assert_eq!(cards, expected);
}

#[test]
fn transforms_compose_in_order() {
    let cards = deck::new([
        deck::filter(|c| c.rank > card::TEN),
        deck::decks(2),
        deck::jokers(1),
    ]);

    // 40 low cards doubled, then one joker at the very end.
    assert_eq!(cards.len(), 81);
    assert_eq!(cards[80], Card::new(Suit::Joker, 0));
    assert!(cards[..80].iter().all(|c| c.rank <= card::TEN));
}

#[test]
fn card_rendering_matches_contract() {
    assert_eq!(Card::new(Suit::Spade, card::ACE).to_string(), "Ace of Spades");
    assert_eq!(Card::new(Suit::Heart, card::KING).to_string(), "King of Hearts");
    assert_eq!(Card::new(Suit::Diamond, card::TEN).to_string(), "Ten of Diamonds");
    assert_eq!(Card::new(Suit::Club, card::JACK).to_string(), "Jack of Clubs");
    assert_eq!(Card::new(Suit::Joker, 1).to_string(), "Joker");
}

#[test]
fn out_of_range_ranks_render_numerically() {
    assert_eq!(Card::new(Suit::Spade, 14).to_string(), "Rank(14) of Spades");
    assert_eq!(Card::new(Suit::Club, 0).to_string(), "Rank(0) of Clubs");
}

#[test]
fn card_parsing_round_trips() {
    for c in deck::new([deck::jokers(1)]) {
        assert_eq!(c.to_string().parse::<Card>(), Ok(c));
    }

    assert_eq!(
        "Queen of Spades".parse::<Card>(),
        Ok(Card::new(Suit::Spade, card::QUEEN))
    );
    assert_eq!("Ace Spades".parse::<Card>(), Err(ParseCardError::Format));
    assert_eq!("Elf of Spades".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("Ace of Rubies".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    // Only the bare "Joker" form may produce a joker.
    assert_eq!("Ace of Jokers".parse::<Card>(), Err(ParseCardError::UnknownSuit));
}
