use crate::estimator::{OddsError, estimate_trick};
use core::fmt;
use hearts_model::Card;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// What the surrounding game engine must expose for one decision
/// point. Implemented by the host; the estimator only reads it.
pub trait GameView {
    /// The acting player's current hand, in its display order.
    fn hand(&self) -> &[Card];

    /// Cards already played this trick. The first one fixes the lead
    /// suit; empty means the acting player leads.
    fn table_cards(&self) -> &[Card];

    /// Cards the acting player has not seen yet (includes nothing from
    /// their own hand or the table).
    fn unseen_cards(&self) -> &[Card];

    /// Indices into `hand()` that are legal to play right now.
    fn legal_indices(&self) -> &[usize];

    fn penalty(&self, card: Card) -> u8 {
        card.penalty_value()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    LegalIndexOutOfRange { index: usize, hand_len: usize },
    UnresolvedEntry { index: usize },
    Odds(OddsError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::LegalIndexOutOfRange { index, hand_len } => {
                write!(f, "legal action index {index} outside hand of {hand_len}")
            }
            SnapshotError::UnresolvedEntry { index } => {
                write!(f, "candidate {index} produced an unresolved estimate")
            }
            SnapshotError::Odds(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<OddsError> for SnapshotError {
    fn from(err: OddsError) -> Self {
        SnapshotError::Odds(err)
    }
}

/// Read-only view assembled once per decision point: the legal
/// candidate cards, the pool of cards held by the other players, and
/// penalty lookups for both. Discarded after producing its report.
#[derive(Debug, Clone)]
pub struct DecisionSnapshot {
    table_cards: Vec<Card>,
    legal_cards: Vec<Card>,
    cards_by_others: Vec<Card>,
    table_penalties: Vec<u8>,
    candidate_penalties: Vec<u8>,
}

/// Index-aligned results for every legal candidate: probability of
/// taking the trick, its complement, and the penalty points expected
/// to arrive with the remaining plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsReport {
    pub p_take: Vec<f64>,
    pub p_avoid: Vec<f64>,
    pub expected_penalty: Vec<f64>,
}

impl DecisionSnapshot {
    pub fn from_view<V: GameView>(view: &V) -> Result<Self, SnapshotError> {
        let hand = view.hand();
        let table_cards = view.table_cards().to_vec();
        let mut legal_cards = Vec::with_capacity(view.legal_indices().len());
        for &index in view.legal_indices() {
            let card =
                hand.get(index)
                    .copied()
                    .ok_or(SnapshotError::LegalIndexOutOfRange {
                        index,
                        hand_len: hand.len(),
                    })?;
            legal_cards.push(card);
        }

        let cards_by_others: Vec<Card> = view
            .unseen_cards()
            .iter()
            .copied()
            .filter(|card| !hand.contains(card))
            .collect();

        let table_penalties = table_cards.iter().map(|&c| view.penalty(c)).collect();
        let candidate_penalties = legal_cards.iter().map(|&c| view.penalty(c)).collect();

        Ok(Self {
            table_cards,
            legal_cards,
            cards_by_others,
            table_penalties,
            candidate_penalties,
        })
    }

    pub fn legal_cards(&self) -> &[Card] {
        &self.legal_cards
    }

    pub fn cards_by_others(&self) -> &[Card] {
        &self.cards_by_others
    }

    pub fn table_penalties(&self) -> &[u8] {
        &self.table_penalties
    }

    pub fn candidate_penalties(&self) -> &[u8] {
        &self.candidate_penalties
    }

    /// Runs the trick estimator over every legal candidate. Every
    /// entry of the report is a finite value; an unresolved or
    /// non-finite estimate aborts the whole report.
    pub fn trick_odds(&self) -> Result<OddsReport, SnapshotError> {
        let count = self.legal_cards.len();
        let mut p_take = Vec::with_capacity(count);
        let mut p_avoid = Vec::with_capacity(count);
        let mut expected_penalty = Vec::with_capacity(count);

        for (index, &card) in self.legal_cards.iter().enumerate() {
            let estimate = estimate_trick(card, &self.table_cards, &self.cards_by_others)?;
            let take = estimate
                .chance
                .probability()
                .ok_or(SnapshotError::UnresolvedEntry { index })?;
            if !estimate.expected_penalty.is_finite() {
                return Err(SnapshotError::UnresolvedEntry { index });
            }
            p_take.push(take.value());
            p_avoid.push(take.complement().value());
            expected_penalty.push(estimate.expected_penalty);
        }

        if tracing::enabled!(Level::DEBUG) {
            let riskiest = p_take.iter().cloned().fold(0.0f64, f64::max);
            event!(
                target: "hearts_odds::snapshot",
                Level::DEBUG,
                candidates = count,
                table_cards = self.table_cards.len(),
                pool = self.cards_by_others.len(),
                riskiest_take = riskiest,
            );
        }

        Ok(OddsReport {
            p_take,
            p_avoid,
            expected_penalty,
        })
    }
}
