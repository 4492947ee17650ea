//! CLI deck demo: build a shoe of two decks plus jokers, shuffle it, and
//! deal five cards at a time.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use deckrs::deck;

const HAND: usize = 5;

fn fresh_shoe() -> deckrs::Deck {
    deck::new([deck::decks(2), deck::jokers(2), deck::shuffle()])
}

fn main() {
    println!("Deck demo: two shuffled decks with jokers.");
    println!("Press Enter to deal {HAND} cards, 'q' to quit.");

    let mut cards = fresh_shoe();

    loop {
        match prompt_line("> ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => {}
        }

        if cards.len() < HAND {
            println!("Shoe exhausted, reshuffling.");
            cards = fresh_shoe();
        }

        for card in cards.drain(..HAND) {
            println!("  {card}");
        }
        println!("{} cards left", cards.len());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_lowercase()
}
