use hearts_model::{Card, Rank, Suit};

/// Tunable weights for the hand-authored card-value rules. Higher
/// value means the card is worth keeping, so it ranks lower as a play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueParams {
    /// Half-width of the descending baseline over the input ordering.
    pub baseline_span: f64,
    /// Added when the card would lead a trick with an ace.
    pub lead_ace_hold: f64,
    /// Added to the ace of hearts to keep it in hand.
    pub keep_heart_ace: f64,
    /// Subtracted from clubs and diamonds to void them early.
    pub early_void_discount: f64,
}

impl Default for ValueParams {
    fn default() -> Self {
        Self {
            baseline_span: 0.1,
            lead_ace_hold: 0.5,
            keep_heart_ace: 0.5,
            early_void_discount: 0.2,
        }
    }
}

/// Baseline preference ranking over `cards`, one value per card in
/// input order. The baseline descends linearly over the input (the
/// low-hearts-last convention of sorted hands), then three rules
/// adjust it: never lead an ace, hold the ace of hearts, and shed the
/// minor suits early.
pub fn card_values(cards: &[Card], table: &[Card], params: &ValueParams) -> Vec<f64> {
    let mut values = descending_baseline(cards.len(), params.baseline_span);
    for (value, card) in values.iter_mut().zip(cards) {
        if table.is_empty() && card.rank == Rank::Ace {
            *value += params.lead_ace_hold;
        }
        if card.suit == Suit::Hearts && card.rank == Rank::Ace {
            *value += params.keep_heart_ace;
        }
        if card.suit.is_minor() {
            *value -= params.early_void_discount;
        }
    }
    values
}

/// `count` evenly spaced values from `+span` down to `-span` inclusive.
fn descending_baseline(count: usize, span: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![span],
        _ => (0..count)
            .map(|i| span - 2.0 * span * i as f64 / (count - 1) as f64)
            .collect(),
    }
}
