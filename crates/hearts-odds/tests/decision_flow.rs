use hearts_model::{Card, Rank, Seat, Suit, full_deck};
use hearts_odds::{DecisionSnapshot, GameView, OwnershipTable, ValueParams, card_values};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

struct MidRoundView {
    hand: Vec<Card>,
    table: Vec<Card>,
    played: Vec<Card>,
    unseen: Vec<Card>,
    legal: Vec<usize>,
}

impl GameView for MidRoundView {
    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn table_cards(&self) -> &[Card] {
        &self.table
    }

    fn unseen_cards(&self) -> &[Card] {
        &self.unseen
    }

    fn legal_indices(&self) -> &[usize] {
        &self.legal
    }
}

/// Trick three of a round: two club tricks are done, diamonds were led,
/// and we must follow with the three or king of diamonds.
fn mid_round() -> MidRoundView {
    let hand = vec![
        card(Rank::Three, Suit::Diamonds),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Five, Suit::Spades),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
    ];
    let table = vec![
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Queen, Suit::Diamonds),
    ];
    let played: Vec<Card> = (2..=9)
        .map(|v| card(Rank::from_value(v).unwrap(), Suit::Clubs))
        .collect();
    let unseen: Vec<Card> = full_deck()
        .iter()
        .copied()
        .filter(|c| !hand.contains(c) && !table.contains(c) && !played.contains(c))
        .collect();
    MidRoundView {
        hand,
        table,
        played,
        unseen,
        legal: vec![0, 1],
    }
}

#[test]
fn snapshot_report_covers_every_legal_card() {
    let view = mid_round();
    let snapshot = DecisionSnapshot::from_view(&view).unwrap();
    let report = snapshot.trick_odds().unwrap();

    assert_eq!(report.p_take.len(), 2);

    // The three of diamonds is already beaten by the queen.
    assert_eq!(report.p_take[0], 0.0);
    assert_eq!(report.p_avoid[0], 1.0);
    assert_eq!(report.expected_penalty[0], 0.0);

    // The king only loses to the ace, one card in a pool of 32, with
    // one play left behind us.
    assert!((report.p_take[1] - 31.0 / 32.0).abs() < 1e-12);
    assert!((report.p_take[1] + report.p_avoid[1] - 1.0).abs() < 1e-12);

    // Ten unseen hearts and the queen of spades could still drop on us.
    assert!((report.expected_penalty[1] - 23.0 / 31.0).abs() < 1e-12);
}

#[test]
fn snapshot_is_stable_across_reruns() {
    let view = mid_round();
    let snapshot = DecisionSnapshot::from_view(&view).unwrap();
    assert_eq!(snapshot.trick_odds().unwrap(), snapshot.trick_odds().unwrap());
}

#[test]
fn ownership_table_agrees_with_the_same_state() {
    let view = mid_round();
    let ownerships =
        OwnershipTable::from_partition(&view.hand, &view.table, &view.played, &view.unseen)
            .unwrap();

    // Our king is certainly ours; the played clubs belong to nobody.
    assert_eq!(
        ownerships
            .has_card(Seat::Us, card(Rank::King, Suit::Diamonds))
            .unwrap()
            .value(),
        1.0
    );
    assert_eq!(
        ownerships
            .has_card(Seat::Left, card(Rank::Two, Suit::Clubs))
            .unwrap()
            .value(),
        0.0
    );

    // The ace of diamonds threat the estimator prices in is exactly an
    // unseen card here, split across the three opponents.
    let threat = ownerships
        .has_card_above(Seat::Across, card(Rank::King, Suit::Diamonds))
        .unwrap();
    assert!((threat.value() - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn card_values_rank_the_hand_for_leading() {
    let view = mid_round();
    let values = card_values(&view.hand, &[], &ValueParams::default());
    assert_eq!(values.len(), view.hand.len());

    // Minor-suit cards sit below same-position majors, so clubs get
    // shed before spades and hearts of similar baseline.
    let clubs_value = values[2];
    let spades_value = values[4];
    assert!(clubs_value < spades_value);
}
