use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::OnceLock;

pub const DECK_SIZE: usize = 52;

/// Canonical enumeration of the full deck, suit-major then rank
/// ascending. `full_deck()[card.deck_index()] == card` for every card.
pub fn full_deck() -> &'static [Card; DECK_SIZE] {
    static DECK: OnceLock<[Card; DECK_SIZE]> = OnceLock::new();
    DECK.get_or_init(|| {
        let mut cards = [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE];
        let mut slot = 0;
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards[slot] = Card::new(rank, suit);
                slot += 1;
            }
        }
        cards
    })
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self {
            cards: full_deck().to_vec(),
        }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
