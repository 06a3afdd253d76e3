#![deny(warnings)]
//! Card domain types shared by the odds estimator: suits, ranks, cards
//! with penalty values, seats, and the canonical 52-card deck.

pub mod card;
pub mod deck;
pub mod rank;
pub mod seat;
pub mod suit;

pub use card::Card;
pub use deck::{DECK_SIZE, Deck, full_deck};
pub use rank::Rank;
pub use seat::Seat;
pub use suit::Suit;
