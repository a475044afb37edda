//! Card, hand, shoe and counter tests.

#![expect(clippy::float_cmp, reason = "counts are exact multiples")]

use shoecount::hand::{self, is_blackjack, score};
use shoecount::{
    Advantage, BetSuggestion, Card, CardCounter, DECK_SIZE, DealerHand, GameOptions, Hand, Rank,
    RoundOutcome, RoundingMode, Shoe, ShoeError, Suit, advisory, hi_lo_weight, standard_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Hearts)).collect()
}

#[test]
fn card_display_matches_artwork_keys() {
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "ace_of_spades");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10_of_hearts");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2_of_clubs");
    assert_eq!(card(Rank::Queen, Suit::Diamonds).to_string(), "queen_of_diamonds");
}

#[test]
fn standard_deck_has_every_card_once() {
    let deck: Vec<Card> = standard_deck().collect();
    assert_eq!(deck.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(deck.iter().filter(|c| **c == card(rank, suit)).count(), 1);
        }
    }
}

#[test]
fn score_counts_faces_as_ten_and_aces_soft() {
    assert_eq!(score(&cards(&[Rank::King, Rank::Queen])), 20);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Six])), 17);
    assert!(hand::is_soft(&cards(&[Rank::Ace, Rank::Six])));
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])), 17);
    assert!(!hand::is_soft(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])));
    assert_eq!(score(&[]), 0);
}

#[test]
fn score_adjusts_multiple_aces() {
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(
        score(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(
        score(&cards(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen])),
        22
    );
}

#[test]
fn long_runs_of_aces_count_one_each() {
    let aces = vec![card(Rank::Ace, Suit::Spades); 30];
    assert_eq!(score(&aces), 30);
    assert!(!hand::is_soft(&aces));

    let eleven = vec![card(Rank::Ace, Suit::Spades); 11];
    assert_eq!(score(&eleven), 21);
    assert!(hand::is_soft(&eleven));
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
    assert!(is_blackjack(&cards(&[Rank::Ten, Rank::Ace])));
    assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    assert!(!is_blackjack(&cards(&[Rank::King, Rank::Queen])));
}

#[test]
fn hand_tracks_pairs_and_busts() {
    let mut player = Hand::new();
    player.push(card(Rank::Eight, Suit::Hearts));
    player.push(card(Rank::Eight, Suit::Spades));
    assert!(player.is_pair());
    assert_eq!(player.score(), 16);

    player.push(card(Rank::Nine, Suit::Clubs));
    assert!(!player.is_pair());
    assert!(player.is_bust());

    player.clear();
    assert!(player.is_empty());

    let mut faces = Hand::new();
    faces.push(card(Rank::King, Suit::Hearts));
    faces.push(card(Rank::Queen, Suit::Hearts));
    assert!(!faces.is_pair());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.push(card(Rank::Ace, Suit::Hearts));
    dealer.push(card(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_score(), 11);
    assert_eq!(dealer.up_card(), Some(&card(Rank::Ace, Suit::Hearts)));

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_score(), 17);

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn shoe_shrinks_by_one_per_draw() {
    let mut shoe = Shoe::new(4, 11);
    assert_eq!(shoe.len(), 4 * DECK_SIZE);
    assert_eq!(shoe.capacity(), 208);

    for drawn in 1..=30 {
        assert!(shoe.draw().is_some());
        assert_eq!(shoe.len(), 208 - drawn);
    }

    shoe.reshuffle();
    assert_eq!(shoe.len(), 208);
}

#[test]
fn shoe_holds_each_card_once_per_deck() {
    let shoe = Shoe::new(2, 3);
    let ace_of_spades = card(Rank::Ace, Suit::Spades);
    assert_eq!(shoe.cards().iter().filter(|c| **c == ace_of_spades).count(), 2);
}

#[test]
fn shoe_shuffle_depends_on_seed() {
    assert_eq!(Shoe::new(4, 5).cards(), Shoe::new(4, 5).cards());
    assert_ne!(Shoe::new(4, 5).cards(), Shoe::new(4, 6).cards());
}

#[test]
fn empty_shoe_returns_none() {
    let mut shoe = Shoe::new(1, 1);
    shoe.stack(&[]).unwrap();
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), None);
}

#[test]
fn stacked_shoe_draws_in_order() {
    let mut shoe = Shoe::new(1, 1);
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
    ];
    shoe.stack(&draws).unwrap();

    assert_eq!(shoe.draw(), Some(draws[0]));
    assert_eq!(shoe.draw(), Some(draws[1]));
    assert_eq!(shoe.draw(), Some(draws[2]));
    assert_eq!(shoe.draw(), None);
}

#[test]
fn stacking_beyond_capacity_fails() {
    let mut shoe = Shoe::new(1, 1);
    let too_many = vec![card(Rank::Two, Suit::Hearts); DECK_SIZE + 1];

    assert_eq!(shoe.stack(&too_many).unwrap_err(), ShoeError::Overfull);
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn zero_decks_still_builds_one() {
    assert_eq!(Shoe::new(0, 1).len(), DECK_SIZE);
}

#[test]
fn hi_lo_weights() {
    for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
        assert_eq!(hi_lo_weight(rank), 1);
    }
    for rank in [Rank::Seven, Rank::Eight, Rank::Nine] {
        assert_eq!(hi_lo_weight(rank), 0);
    }
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
        assert_eq!(hi_lo_weight(rank), -1);
    }
}

#[test]
fn full_shoe_counts_back_to_zero() {
    let mut shoe = Shoe::new(4, 99);
    let mut counter = CardCounter::new();

    while let Some(card) = shoe.draw() {
        counter.observe(&card);
    }

    assert_eq!(counter.running_count(), 0);
    assert_eq!(counter.cards_seen(), 208);
}

#[test]
fn true_count_divides_by_decks_remaining() {
    let mut counter = CardCounter::new();
    assert_eq!(counter.true_count(208), 0.0);

    for _ in 0..4 {
        counter.observe(&card(Rank::Five, Suit::Hearts));
    }
    assert_eq!(counter.running_count(), 4);
    assert_eq!(counter.true_count(104), 2.0);
    assert_eq!(counter.decks_remaining(104), 2.0);

    // Fewer than half a deck left divides by 0.5.
    assert_eq!(counter.true_count(10), 8.0);
    assert_eq!(counter.true_count(0), 8.0);

    counter.reset();
    assert_eq!(counter.running_count(), 0);
    assert_eq!(counter.cards_seen(), 0);
}

#[test]
fn advantage_thresholds() {
    let cases = [
        (5.0, Advantage::VeryFavorable, "VERY FAVORABLE"),
        (3.0, Advantage::VeryFavorable, "VERY FAVORABLE"),
        (2.0, Advantage::Favorable, "FAVORABLE"),
        (1.0, Advantage::SlightEdge, "Slight Edge"),
        (0.99, Advantage::Neutral, "Neutral"),
        (-0.99, Advantage::Neutral, "Neutral"),
        (-1.0, Advantage::HouseEdge, "House Edge"),
        (-2.0, Advantage::Unfavorable, "UNFAVORABLE"),
        (-3.0, Advantage::VeryBad, "VERY BAD"),
        (-7.5, Advantage::VeryBad, "VERY BAD"),
    ];

    for (true_count, advantage, label) in cases {
        assert_eq!(Advantage::from_true_count(true_count), advantage, "{true_count}");
        assert_eq!(advantage.to_string(), label);
    }
}

#[test]
fn bet_suggestion_thresholds() {
    let cases = [
        (3.0, BetSuggestion::MaxBet, "MAX BET"),
        (2.5, BetSuggestion::IncreaseBet, "Increase Bet"),
        (1.0, BetSuggestion::SmallIncrease, "Small Increase"),
        (0.0, BetSuggestion::StandardBet, "Standard Bet"),
        (-1.0, BetSuggestion::StandardBet, "Standard Bet"),
        (-1.99, BetSuggestion::StandardBet, "Standard Bet"),
        (-2.0, BetSuggestion::MinBetOnly, "MIN BET ONLY"),
        (-3.0, BetSuggestion::MinBetOnly, "MIN BET ONLY"),
    ];

    for (true_count, suggestion, label) in cases {
        assert_eq!(BetSuggestion::from_true_count(true_count), suggestion, "{true_count}");
        assert_eq!(suggestion.to_string(), label);
    }
}

#[test]
fn advisory_combines_both_tables() {
    let hint = advisory(-1.0);
    assert_eq!(hint.advantage, Advantage::HouseEdge);
    assert_eq!(hint.suggestion, BetSuggestion::StandardBet);

    let mut counter = CardCounter::new();
    for _ in 0..6 {
        counter.observe(&card(Rank::Two, Suit::Clubs));
    }
    let hint = counter.advisory(104);
    assert_eq!(hint.advantage, Advantage::VeryFavorable);
    assert_eq!(hint.suggestion, BetSuggestion::MaxBet);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(6)
        .with_reshuffle_threshold(78)
        .with_starting_balance(500)
        .with_blackjack_pays(1.2)
        .with_rounding_blackjack(RoundingMode::Nearest)
        .with_insurance(false);

    assert_eq!(options.decks, 6);
    assert_eq!(options.reshuffle_threshold, 78);
    assert_eq!(options.starting_balance, 500);
    assert_eq!(options.blackjack_pays, 1.2);
    assert_eq!(options.rounding_blackjack, RoundingMode::Nearest);
    assert!(!options.insurance);
}

#[test]
fn default_options() {
    let options = GameOptions::default();

    assert_eq!(options.decks, 4);
    assert_eq!(options.reshuffle_threshold, DECK_SIZE);
    assert_eq!(options.starting_balance, 1000);
    assert_eq!(options.blackjack_pays, 1.5);
    assert_eq!(options.rounding_blackjack, RoundingMode::Down);
    assert!(options.insurance);
}

#[test]
fn winning_outcomes() {
    assert!(RoundOutcome::Blackjack.is_win());
    assert!(RoundOutcome::Win.is_win());
    assert!(RoundOutcome::DealerBust.is_win());
    assert!(!RoundOutcome::Lose.is_win());
    assert!(!RoundOutcome::Bust.is_win());
    assert!(!RoundOutcome::Push.is_win());
    assert_eq!(RoundOutcome::DealerBust.to_string(), "Dealer busts! You win!");
}
