use crate::chance::{Probability, ProbabilityError, TrickChance};
use core::fmt;
use hearts_model::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum OddsError {
    /// `take_probability` was asked about a trick with no plays left.
    /// The caller should have resolved that case via the last-card
    /// branch already.
    NoIncomingCards,
    /// No competing cards remain, so there is no pool to draw from.
    NoCompetingCards,
    BadProbability(ProbabilityError),
}

impl fmt::Display for OddsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsError::NoIncomingCards => {
                write!(f, "no incoming cards to estimate, upstream logic error")
            }
            OddsError::NoCompetingCards => {
                write!(f, "no competing cards remain to draw from")
            }
            OddsError::BadProbability(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for OddsError {}

impl From<ProbabilityError> for OddsError {
    fn from(err: ProbabilityError) -> Self {
        OddsError::BadProbability(err)
    }
}

/// What the estimator says about one candidate card: the chance it
/// takes the trick, and the penalty points expected to land in the
/// trick from cards still to come.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrickEstimate {
    pub chance: TrickChance,
    pub expected_penalty: f64,
}

impl TrickEstimate {
    const fn resolved(chance: TrickChance) -> Self {
        Self {
            chance,
            expected_penalty: 0.0,
        }
    }
}

/// Cards from `cards` that would beat a `(suit, rank)` play: same suit,
/// strictly higher rank. Relative order is preserved.
pub fn cards_above(cards: &[Card], suit: Suit, rank: Rank) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.suit == suit && c.rank > rank)
        .collect()
}

/// Complement of [`cards_above`]: different suit or lower rank. An
/// off-suit card cannot beat a led card, so it belongs with the low
/// ones here.
pub fn cards_below(cards: &[Card], suit: Suit, rank: Rank) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.suit != suit || c.rank < rank)
        .collect()
}

/// Probability that none of the `n_higher` beating cards lands among
/// the `n_incoming` remaining plays of this trick, treating each play
/// as an independent draw from the competing pool. Exact `Always` and
/// `Never` at the boundaries so downstream comparisons stay exact.
pub fn take_probability(
    n_higher: usize,
    n_lower: usize,
    n_incoming: usize,
) -> Result<TrickChance, OddsError> {
    if n_incoming == 0 {
        return Err(OddsError::NoIncomingCards);
    }
    let pool = n_higher + n_lower;
    if pool == 0 {
        return Err(OddsError::NoCompetingCards);
    }
    let p_lower = n_lower as f64 / pool as f64;
    if p_lower == 1.0 {
        return Ok(TrickChance::Always);
    }
    if p_lower == 0.0 {
        return Ok(TrickChance::Never);
    }
    let estimate = Probability::new(p_lower.powi(n_incoming as i32))?;
    Ok(TrickChance::Estimated(estimate))
}

/// Estimates whether `card` takes the current trick given the cards on
/// the table and the cards known to be held by the other players
/// collectively (no seat assignment).
///
/// The draw-based branch approximates the remaining plays as uniform
/// draws from the unassigned pool. It ignores which seats hold which
/// cards, what would be legal for them, and that seats already in the
/// trick no longer play; these simplifications are deliberate.
pub fn estimate_trick(
    card: Card,
    table: &[Card],
    others: &[Card],
) -> Result<TrickEstimate, OddsError> {
    let lead_suit = table.first().map(|c| c.suit).unwrap_or(card.suit);

    if card.suit != lead_suit {
        return Ok(TrickEstimate::resolved(TrickChance::Never));
    }

    // On suit, but possibly already beaten on the table.
    if !cards_above(table, card.suit, card.rank).is_empty() {
        return Ok(TrickEstimate::resolved(TrickChance::Never));
    }

    if table.len() >= 3 {
        // We close the trick: nothing on the table beats us and no
        // further cards come in.
        return Ok(TrickEstimate::resolved(TrickChance::Always));
    }

    let n_incoming = 4 - table.len() - 1;
    let above = cards_above(others, card.suit, card.rank);
    let below = cards_below(others, card.suit, card.rank);

    // Cards that beat us go to whoever plays them; only beaten cards
    // can feed us penalty points.
    let expected_penalty = if below.is_empty() {
        0.0
    } else {
        let total: f64 = below.iter().map(|c| c.penalty_value() as f64).sum();
        total / below.len() as f64 * n_incoming as f64
    };

    if above.is_empty() {
        return Ok(TrickEstimate {
            chance: TrickChance::Always,
            expected_penalty,
        });
    }

    if others.len() < 4 {
        // Too few unassigned cards left for the beating card to be
        // withheld past this trick; it will be played against us.
        return Ok(TrickEstimate::resolved(TrickChance::Never));
    }

    let chance = take_probability(above.len(), below.len(), n_incoming)?;
    Ok(TrickEstimate {
        chance,
        expected_penalty,
    })
}

/// Elementwise expected penalty contribution of each card after
/// `n_incoming` draws without replacement from the pool.
pub fn penalty_contributions(penalties: &[f64], n_incoming: usize) -> Vec<f64> {
    if penalties.is_empty() {
        return Vec::new();
    }
    let p_drawn = n_incoming as f64 / penalties.len() as f64;
    penalties.iter().map(|p| p * p_drawn).collect()
}
