#![deny(warnings)]
//! Trick-outcome odds for Hearts: given a candidate card, what is on
//! the table, and which cards the other players still hold, estimate
//! the probability of taking the trick and the penalty points expected
//! to arrive with it.
//!
//! Modules:
//! - `chance`: bounded probability type and the tagged trick-chance
//!   result (certain vs. estimated).
//! - `estimator`: partition filters, the combinatorial draw
//!   approximation, and the case analysis over one trick.
//! - `ownership`: single-round per-card, per-seat holding inference.
//! - `snapshot`: per-decision view over the host game state producing
//!   index-aligned result vectors.
//! - `values`: hand-authored baseline card-value rules.

pub mod chance;
pub mod estimator;
pub mod ownership;
pub mod snapshot;
pub mod values;

pub use chance::{Probability, ProbabilityError, TrickChance};
pub use estimator::{
    OddsError, TrickEstimate, cards_above, cards_below, estimate_trick, penalty_contributions,
    take_probability,
};
pub use ownership::{OwnershipError, OwnershipTable};
pub use snapshot::{DecisionSnapshot, GameView, OddsReport, SnapshotError};
pub use values::{ValueParams, card_values};
