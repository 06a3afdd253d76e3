use crate::rank::Rank;
use crate::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn is_penalty(self) -> bool {
        matches!(self.suit, Suit::Hearts) || self.is_queen_of_spades()
    }

    pub const fn is_queen_of_spades(self) -> bool {
        matches!(self.rank, Rank::Queen) && matches!(self.suit, Suit::Spades)
    }

    /// Points awarded to whoever takes a trick containing this card.
    pub fn penalty_value(self) -> u8 {
        if self.is_queen_of_spades() {
            13
        } else if self.suit == Suit::Hearts {
            1
        } else {
            0
        }
    }

    /// Stable slot of this card within [`crate::deck::full_deck`].
    pub const fn deck_index(self) -> usize {
        self.suit.index() * 13 + self.rank.ordinal()
    }

    /// Whether this card outranks `other` in a trick led with `lead` suit.
    /// Off-suit cards never beat on-suit ones.
    pub fn beats(self, other: Card, lead: Suit) -> bool {
        if self.suit != lead {
            return false;
        }
        other.suit != lead || self.rank > other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn queen_of_spades_is_thirteen_points() {
        let card = Card::new(Rank::Queen, Suit::Spades);
        assert!(card.is_queen_of_spades());
        assert!(card.is_penalty());
        assert_eq!(card.penalty_value(), 13);
    }

    #[test]
    fn hearts_are_one_point() {
        let card = Card::new(Rank::Two, Suit::Hearts);
        assert!(card.is_penalty());
        assert_eq!(card.penalty_value(), 1);
    }

    #[test]
    fn plain_card_scores_nothing() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert!(!card.is_penalty());
        assert_eq!(card.penalty_value(), 0);
    }

    #[test]
    fn beats_respects_lead_suit() {
        let lead = Suit::Hearts;
        let five = Card::new(Rank::Five, Suit::Hearts);
        let two = Card::new(Rank::Two, Suit::Hearts);
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);
        assert!(five.beats(two, lead));
        assert!(!two.beats(five, lead));
        assert!(!ace_clubs.beats(two, lead));
        assert!(two.beats(ace_clubs, lead));
    }

    #[test]
    fn serde_round_trip_preserves_identity() {
        let card = Card::new(Rank::Jack, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
