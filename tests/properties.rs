use proptest::prelude::*;
use shoecount::hand::{is_blackjack, score};
use shoecount::{
    Card, CardCounter, DEALER_STANDS_ON, GameOptions, Progress, Rank, RoundOutcome, RoundState,
    Session, Shoe, Suit,
};

fn any_rank() -> impl Strategy<Value = Rank> {
    (0..Rank::ALL.len()).prop_map(|index| Rank::ALL[index])
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Mostly aces, with the odd low card mixed in.
fn ace_heavy_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        6 => any_suit().prop_map(|suit| Card::new(Rank::Ace, suit)),
        1 => any_suit().prop_map(|suit| Card::new(Rank::Two, suit)),
    ]
}

/// Best total reachable by counting some aces as 11, falling back to all ones.
fn best_total(cards: &[Card]) -> u32 {
    let aces = cards.iter().filter(|card| card.is_ace()).count() as u32;
    let hard: u32 = cards
        .iter()
        .map(|card| if card.is_ace() { 1 } else { u32::from(card.rank.value()) })
        .sum();

    (0..=aces)
        .map(|soft| hard + 10 * soft)
        .filter(|total| *total <= 21)
        .max()
        .unwrap_or(hard)
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Hit,
    Stand,
    Double,
    Insurance,
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::Hit),
        3 => Just(Command::Stand),
        1 => Just(Command::Double),
        1 => Just(Command::Insurance),
    ]
}

proptest! {
    #[test]
    fn score_is_best_total_under_22(cards in prop::collection::vec(any_card(), 0..26)) {
        prop_assert_eq!(u32::from(score(&cards)), best_total(&cards));
    }

    #[test]
    fn score_handles_many_aces(cards in prop::collection::vec(ace_heavy_card(), 0..120)) {
        prop_assert_eq!(u32::from(score(&cards)), best_total(&cards));
    }

    #[test]
    fn blackjack_only_with_two_cards(cards in prop::collection::vec(any_card(), 0..8)) {
        if is_blackjack(&cards) {
            prop_assert_eq!(cards.len(), 2);
            prop_assert_eq!(score(&cards), 21);
        }
    }

    #[test]
    fn full_shoe_count_is_balanced(decks in 1u8..=8, seed in any::<u64>()) {
        let mut shoe = Shoe::new(decks, seed);
        let mut counter = CardCounter::new();
        while let Some(card) = shoe.draw() {
            counter.observe(&card);
        }
        prop_assert_eq!(counter.running_count(), 0);
        prop_assert_eq!(counter.cards_seen() as usize, usize::from(decks) * 52);
    }

    #[test]
    fn sessions_keep_their_books(
        seed in any::<u64>(),
        rounds in prop::collection::vec(
            (1i64..=200, prop::collection::vec(any_command(), 1..6)),
            1..12,
        ),
    ) {
        let mut session = Session::new(GameOptions::default(), seed);

        for (bet, commands) in rounds {
            if session.state() == RoundState::NoFunds {
                session.reset_balance();
            }

            let before = session.balance();
            let bet = bet.min(before);
            let mut insurance_net = 0;

            let mut settled = match session.place_bet(bet) {
                Ok(Progress::Settled(result)) => Some(result),
                Ok(Progress::PlayerTurn) => None,
                Err(error) => return Err(TestCaseError::fail(format!("bet rejected: {error}"))),
            };

            for command in commands {
                if settled.is_some() {
                    break;
                }
                settled = match command {
                    Command::Hit => session.hit().ok().and_then(|p| p.result().cloned()),
                    Command::Stand => session.stand().ok(),
                    Command::Double => session.double_down().ok(),
                    Command::Insurance => {
                        if let Ok(outcome) = session.take_insurance() {
                            insurance_net += outcome.net();
                        }
                        None
                    }
                };
            }

            let result = match settled {
                Some(result) => result,
                None => session
                    .stand()
                    .map_err(|error| TestCaseError::fail(format!("stand rejected: {error}")))?,
            };

            prop_assert_eq!(result.balance_after, before + insurance_net + result.net);
            prop_assert_eq!(session.balance(), result.balance_after);
            prop_assert!(!session.is_round_in_progress());
            prop_assert_eq!(
                session.cards_seen() as usize + session.shoe_remaining(),
                session.shoe_total()
            );

            let dealer_played = matches!(
                result.outcome,
                RoundOutcome::Win | RoundOutcome::Lose | RoundOutcome::DealerBust
            );
            if dealer_played {
                prop_assert!(result.dealer_score >= DEALER_STANDS_ON);
            }
            if result.outcome == RoundOutcome::Bust {
                prop_assert!(result.player_score > 21);
            }
        }
    }
}
