use core::fmt;
use serde::{Deserialize, Serialize};

/// A probability constrained to `[0, 1]`. Construction outside that
/// range is a contract violation, not a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Probability(f64);

#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityError {
    OutOfRange(f64),
}

impl fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbabilityError::OutOfRange(value) => {
                write!(f, "invalid probability value {value}, expected [0, 1]")
            }
        }
    }
}

impl std::error::Error for ProbabilityError {}

impl Probability {
    pub const NEVER: Probability = Probability(0.0);
    pub const ALWAYS: Probability = Probability(1.0);

    pub fn new(value: f64) -> Result<Self, ProbabilityError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn complement(self) -> Probability {
        Probability(1.0 - self.0)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of asking whether a card takes the trick. Certain outcomes
/// carry exact 0/1 semantics; `Estimated` carries a fractional value
/// from the combinatorial approximation. `Maybe` marks a question the
/// estimator has not resolved; current logic never produces it, and it
/// deliberately has no probability value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrickChance {
    Never,
    Always,
    Maybe,
    Estimated(Probability),
}

impl TrickChance {
    pub fn probability(self) -> Option<Probability> {
        match self {
            TrickChance::Never => Some(Probability::NEVER),
            TrickChance::Always => Some(Probability::ALWAYS),
            TrickChance::Maybe => None,
            TrickChance::Estimated(p) => Some(p),
        }
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, TrickChance::Never | TrickChance::Always)
    }
}
