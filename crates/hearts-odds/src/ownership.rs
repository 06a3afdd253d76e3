use crate::chance::{Probability, ProbabilityError};
use core::fmt;
use hearts_model::{Card, DECK_SIZE, Seat, Suit, full_deck};

#[derive(Debug, Clone, PartialEq)]
pub enum OwnershipError {
    /// The hand/table/played/unseen groups overlap or fail to cover the
    /// full deck.
    BrokenPartition { covered: usize, listed: usize },
    BadProbability(ProbabilityError),
}

impl fmt::Display for OwnershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnershipError::BrokenPartition { covered, listed } => write!(
                f,
                "card groups must partition the deck exactly: {covered} distinct cards covered, {listed} listed"
            ),
            OwnershipError::BadProbability(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for OwnershipError {}

impl From<ProbabilityError> for OwnershipError {
    fn from(err: ProbabilityError) -> Self {
        OwnershipError::BadProbability(err)
    }
}

/// Per-card, per-seat holding probabilities inferred from a single
/// round, without any trick history.
///
/// Cross-round tracking (narrowing the distribution as tricks reveal
/// voids) is not implemented; this table only encodes the mutually
/// exclusive set membership of each card at one point in time.
#[derive(Debug, Clone)]
pub struct OwnershipTable {
    probs: [[f64; 4]; DECK_SIZE],
}

impl OwnershipTable {
    /// Infers ownerships from the four disjoint card groups visible to
    /// the acting player. The groups must partition the full deck
    /// exactly; anything else is a caller error.
    ///
    /// The uniform 1/3 split over opponents is only exact while the
    /// table is empty; it is kept as-is for non-empty tables.
    pub fn from_partition(
        hand: &[Card],
        table: &[Card],
        played: &[Card],
        unseen: &[Card],
    ) -> Result<Self, OwnershipError> {
        let listed = hand.len() + table.len() + played.len() + unseen.len();
        let mut seen = [false; DECK_SIZE];
        let mut covered = 0usize;
        for card in hand
            .iter()
            .chain(table.iter())
            .chain(played.iter())
            .chain(unseen.iter())
        {
            let slot = card.deck_index();
            if !seen[slot] {
                seen[slot] = true;
                covered += 1;
            }
        }
        if covered != DECK_SIZE || listed != DECK_SIZE {
            return Err(OwnershipError::BrokenPartition { covered, listed });
        }

        let mut probs = [[0.0f64; 4]; DECK_SIZE];
        for (slot, card) in full_deck().iter().enumerate() {
            if hand.contains(card) {
                probs[slot] = [1.0, 0.0, 0.0, 0.0];
            } else if table.contains(card) || played.contains(card) {
                probs[slot] = [0.0; 4];
            } else {
                probs[slot] = [0.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];
            }
        }
        Ok(Self { probs })
    }

    /// Probability that `seat` currently holds `card`.
    pub fn has_card(&self, seat: Seat, card: Card) -> Result<Probability, OwnershipError> {
        Ok(Probability::new(
            self.probs[card.deck_index()][seat.index()],
        )?)
    }

    /// Probability that `seat` holds at least one card of `suit`.
    pub fn has_suit(&self, seat: Seat, suit: Suit) -> Result<Probability, OwnershipError> {
        self.at_least_one(seat, |card| card.suit == suit)
    }

    /// Probability that `seat` holds a card beating `card` in its suit.
    pub fn has_card_above(&self, seat: Seat, card: Card) -> Result<Probability, OwnershipError> {
        self.at_least_one(seat, |c| c.suit == card.suit && c.rank > card.rank)
    }

    fn at_least_one<F>(&self, seat: Seat, matches: F) -> Result<Probability, OwnershipError>
    where
        F: Fn(&Card) -> bool,
    {
        let none: f64 = full_deck()
            .iter()
            .enumerate()
            .filter(|(_, card)| matches(card))
            .map(|(slot, _)| 1.0 - self.probs[slot][seat.index()])
            .product();
        Ok(Probability::new(1.0 - none)?)
    }

    pub fn row(&self, card: Card) -> &[f64; 4] {
        &self.probs[card.deck_index()]
    }
}
