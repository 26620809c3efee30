//! CLI Baloot example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use baloot::{
    Card, Game, GameOptions, GameState, HandError, PlayError, PlayOutcome, Seat, Suit, Team,
    parse_choice,
};

const HUMAN: Seat = Seat::North;

fn main() {
    println!("Baloot CLI example (type 'q' to quit)");
    print_rules();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let Some(trump) = prompt_trump() else {
            println!("Goodbye.");
            break;
        };

        game.options = GameOptions::default().with_trump(trump);
        game.clear_round();

        if let Err(err) = game.deal() {
            println!("Deal error: {err:?}");
            break;
        }

        while let Some(seat) = game.current_player() {
            let result = if seat == HUMAN {
                print_hand(&game);
                match prompt_human_play(&mut game) {
                    Some(result) => result,
                    None => return,
                }
            } else {
                game.auto_play(seat)
            };

            match result {
                Ok(outcome) => {
                    println!("{seat} played: {}", format_card(&outcome.card));
                    if let Some(winner) = outcome.trick_winner {
                        println!(
                            "{} takes the trick with {}.\n",
                            winner.seat,
                            format_card(&winner.card)
                        );
                    }
                }
                Err(err) => {
                    println!("Play error: {err}");
                    return;
                }
            }
        }

        if game.state() == GameState::RoundOver {
            print_scores(&game);
        }

        if !matches!(prompt_line("Play another round? (y/n): ").as_str(), "y" | "yes") {
            println!("Goodbye.");
            break;
        }
    }
}

fn print_rules() {
    println!(
        "
    - 32 cards: 7, 8, 9, 10, Jack, Queen, King and Ace of each suit.
    - Four players in two teams; you sit North, partnered with South.
    - Cards are dealt five each, then three each.
    - The highest card of the leading suit wins the trick.
    - A trump suit, if chosen, beats every other suit.
    - Points come from the cards in the tricks you take.
"
    );
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

fn prompt_trump() -> Option<Option<Suit>> {
    loop {
        let input =
            prompt_line("Trump suit ([h]earts [d]iamonds [c]lubs [s]pades, blank for none): ");
        let trump = match input.as_str() {
            "q" | "quit" => return None,
            "" => None,
            "h" => Some(Suit::Hearts),
            "d" => Some(Suit::Diamonds),
            "c" => Some(Suit::Clubs),
            "s" => Some(Suit::Spades),
            other => match other.parse::<Suit>() {
                Ok(suit) => Some(suit),
                Err(_) => {
                    println!("Unknown suit.");
                    continue;
                }
            },
        };
        return Some(trump);
    }
}

fn prompt_human_play(game: &mut Game) -> Option<Result<PlayOutcome, PlayError>> {
    loop {
        let size = game.hand(HUMAN).len();
        let input = prompt_line(&format!("Choose a card to play (1-{size}): "));
        if input == "q" || input == "quit" {
            return None;
        }

        let index = match parse_choice(&input, size) {
            Ok(index) => index,
            Err(HandError::InputParse) => {
                println!("Invalid input, please enter a number between 1 and {size}.");
                continue;
            }
            Err(err) => {
                println!("Invalid choice: {err}.");
                continue;
            }
        };

        match game.play_by_index(HUMAN, index) {
            Err(PlayError::MustFollowSuit | PlayError::Hand(_)) => {
                println!("You cannot play that card.");
            }
            result => return Some(result),
        }
    }
}

fn print_hand(game: &Game) {
    let trick = game.current_trick();
    if !trick.plays().is_empty() {
        let table = trick
            .plays()
            .iter()
            .map(|p| format!("{}: {}", p.seat, format_card(&p.card)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("On the table: {table}");
    }

    println!("\nYour hand:");
    for (index, card) in game.hand(HUMAN).cards().iter().enumerate() {
        println!("{}: {}", index + 1, format_card(card));
    }
}

fn print_scores(game: &Game) {
    let Ok(result) = game.final_scores() else {
        return;
    };

    println!("The round is over!");
    for team in Team::ALL {
        let score = result.score(team);
        println!(
            "{team:?}: {} tricks, {} card points, {} last trick, {} baloot, total {}",
            score.tricks,
            score.card_points,
            score.last_trick_bonus,
            score.baloot_bonus,
            score.total()
        );
    }
    if let Some(team) = result.sweep {
        println!("Kaboot! {team:?} took every trick.");
    }
    match result.leader() {
        Some(team) if team == HUMAN.team() => println!("Your team wins the round."),
        Some(_) => println!("The opponents win the round."),
        None => println!("The round is tied."),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
