//! CLI blackjack example with a live Hi-Lo count.
//!
//! Run with `RUST_LOG=debug` to see every card as it leaves the shoe.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use shoecount::{
    Card, GameOptions, LegalActions, Progress, Rank, RoundResult, RoundState, Session, Suit,
    TableView,
};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(GameOptions::default(), seed);
    let mut reshuffles = session.reshuffle_count();

    loop {
        if session.state() == RoundState::NoFunds {
            println!("You are out of money.");
            match prompt_line("Reset balance? (y/n): ").as_str() {
                "y" | "yes" => {
                    session.reset_balance();
                    println!("Balance reset to {}.", session.balance());
                }
                _ => break,
            }
        }

        print_count(&session.view());

        let balance = session.balance();
        let Some(bet) = prompt_amount(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let mut progress = match session.place_bet(bet) {
            Ok(progress) => progress,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while progress == Progress::PlayerTurn {
            let view = session.view();
            print_table(&view);

            if view.legal_actions.insurance {
                println!(
                    "Dealer shows an Ace. Insurance costs {}.",
                    session.insurance_cost()
                );
            }
            println!("{}", format_actions(&view.legal_actions));

            progress = match prompt_line("Action: ").as_str() {
                "h" | "hit" => session.hit().unwrap_or_else(|err| {
                    println!("Action error: {err}");
                    Progress::PlayerTurn
                }),
                "s" | "stand" => settled(session.stand()),
                "d" | "double" => settled(session.double_down()),
                "p" | "split" => {
                    if let Err(err) = session.split() {
                        println!("Action error: {err}");
                    }
                    Progress::PlayerTurn
                }
                "i" | "insurance" => {
                    match session.take_insurance() {
                        Ok(outcome) => println!("Insurance: {outcome:?}"),
                        Err(err) => println!("Insurance error: {err}"),
                    }
                    Progress::PlayerTurn
                }
                // An empty read means stdin is closed.
                "" | "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    Progress::PlayerTurn
                }
            };
        }

        let view = session.view();
        print_table(&view);
        if let Progress::Settled(result) = progress {
            println!("{} (net {})", result.outcome, result.net);
        }

        if session.reshuffle_count() != reshuffles {
            reshuffles = session.reshuffle_count();
            println!("Shoe reshuffled. The count starts over.");
        }
    }
}

fn settled<E: core::fmt::Display>(result: Result<RoundResult, E>) -> Progress {
    match result {
        Ok(result) => Progress::Settled(result),
        Err(err) => {
            println!("Action error: {err}");
            Progress::PlayerTurn
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_amount(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_count(view: &TableView) {
    println!(
        "\nShoe: {}/{} cards | running {} | true {:.1} | {} | {}",
        view.shoe_remaining,
        view.shoe_total,
        view.running_count,
        view.true_count,
        view.advisory.advantage,
        view.advisory.suggestion,
    );
}

fn print_table(view: &TableView) {
    print_count(view);

    let dealer_value = view
        .dealer_score
        .map_or_else(|| "?".to_string(), |score| score.to_string());
    println!(
        "Dealer: {} (value {dealer_value})",
        format_dealer(&view.dealer_cards)
    );

    let player_value = view.player_score.unwrap_or(0);
    println!(
        "You:    {} (value {player_value}) | bet {} | balance {}",
        format_hand(&view.player_cards),
        view.bet,
        view.balance
    );
    if view.split_eligible {
        println!("(pair dealt; splitting is not offered at this table)");
    }
    println!();
}

fn format_actions(actions: &LegalActions) -> String {
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("double", "d", actions.double_down),
        format_action("split", "p", actions.split),
        format_action("insurance", "i", actions.insurance),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Jack => colorize("J", color_code),
        Rank::Queen => colorize("Q", color_code),
        Rank::King => colorize("K", color_code),
        Rank::Ace => colorize("A", color_code),
        _ => card.rank.to_string(),
    };
    format!("{rank}{}", colorize(suit, color_code))
}
