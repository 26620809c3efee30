//! Game integration tests.

mod common;

use std::collections::HashSet;

use baloot::{
    Card, CardError, DECK_SIZE, DealError, Deck, DeckError, Face, Game, GameOptions, GameState,
    HandError, PlayError, Round, RoundError, Seat, Suit, Team, Trick, TrickError, TrickState,
    parse_choice,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::{card, hand_of, init_logging, suit_per_seat};

fn trick_of(trump: Option<Suit>, leader: Seat, cards: [Card; 4]) -> Trick {
    let mut trick = Trick::new(trump);
    for (n, c) in cards.into_iter().enumerate() {
        trick.play(leader.next_n(n), c).unwrap();
    }
    trick
}

#[test]
fn card_display_and_image_name() {
    let jack = card(Face::Jack, Suit::Spades);
    assert_eq!(jack.to_string(), "Jack of Spades");
    assert_eq!(jack.image_name(), "Jack_of_Spades.png");
    assert_eq!(card(Face::Ten, Suit::Hearts).image_name(), "10_of_Hearts.png");
    assert_eq!(jack.face(), Face::Jack);
    assert_eq!(jack.suit(), Suit::Spades);
}

#[test]
fn card_parsing_rejects_values_outside_the_deck() {
    assert_eq!(
        "10 of Hearts".parse::<Card>(),
        Ok(card(Face::Ten, Suit::Hearts))
    );
    assert_eq!(Card::parse("queen", "clubs"), Ok(card(Face::Queen, Suit::Clubs)));
    assert_eq!(
        "2 of Hearts".parse::<Card>().unwrap_err(),
        CardError::InvalidFace
    );
    assert_eq!(
        "Jack of Stars".parse::<Card>().unwrap_err(),
        CardError::InvalidSuit
    );
    assert_eq!("JackSpades".parse::<Card>().unwrap_err(), CardError::Malformed);
    assert_eq!(Face::try_from(6).unwrap_err(), CardError::InvalidFace);
    assert_eq!(Face::try_from(11), Ok(Face::Jack));
}

#[test]
fn rank_tables_order_faces() {
    let by_rank = |trump: bool| {
        let mut faces = Face::ALL.to_vec();
        faces.sort_by_key(|&f| baloot::card::rank(f, trump));
        faces
    };

    assert_eq!(
        by_rank(false),
        [
            Face::Seven,
            Face::Eight,
            Face::Nine,
            Face::Jack,
            Face::Queen,
            Face::King,
            Face::Ten,
            Face::Ace
        ]
    );
    assert_eq!(
        by_rank(true),
        [
            Face::Seven,
            Face::Eight,
            Face::Queen,
            Face::King,
            Face::Ten,
            Face::Ace,
            Face::Nine,
            Face::Jack
        ]
    );

    let suit_points = |trump: bool| -> u16 {
        Face::ALL
            .iter()
            .map(|&f| baloot::card::points(f, trump))
            .sum()
    };
    assert_eq!(suit_points(false), 30);
    assert_eq!(suit_points(true), 62);
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new();
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();

    assert_eq!(deck.cards().len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
    for face in Face::ALL {
        for suit in Suit::ALL {
            assert!(unique.contains(&card(face, suit)));
        }
    }
    assert_eq!(deck.cards()[0], card(Face::Seven, Suit::Hearts));
    assert_eq!(deck.cards()[1], card(Face::Seven, Suit::Diamonds));
    assert_eq!(deck.cards()[31], card(Face::Ace, Suit::Spades));
}

#[test]
fn deck_runs_out_after_32_deals() {
    let mut deck = Deck::new();
    let mut dealt = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(dealt.insert(deck.deal_one().unwrap()));
    }

    assert_eq!(deck.remaining_count(), 0);
    assert_eq!(deck.deal_one().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn shuffle_rewinds_the_cursor() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    for _ in 0..11 {
        deck.deal_one().unwrap();
    }
    assert_eq!(deck.remaining_count(), 21);

    deck.shuffle(&mut rng);
    assert_eq!(deck.remaining_count(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deal_hands_gives_five_then_three() {
    let mut deck = Deck::new();
    let hands = deck.deal_hands(Seat::North).unwrap();

    assert_eq!(deck.remaining_count(), 0);
    assert!(hands.iter().all(|h| h.len() == 8));
    // North takes cards 0..5 in the first pass and 20..23 in the second.
    assert_eq!(hands[0].cards()[0], card(Face::Seven, Suit::Hearts));
    assert_eq!(hands[0].cards()[5], card(Face::Queen, Suit::Hearts));
    // East starts the first pass at card 5.
    assert_eq!(hands[1].cards()[0], card(Face::Eight, Suit::Diamonds));

    assert_eq!(deck.deal_hands(Seat::North).unwrap_err(), DeckError::Exhausted);
}

#[test]
fn trump_beats_any_card_of_the_lead() {
    let trick = trick_of(
        Some(Suit::Spades),
        Seat::North,
        [
            card(Face::Ace, Suit::Hearts),
            card(Face::Ten, Suit::Hearts),
            card(Face::Seven, Suit::Spades),
            card(Face::King, Suit::Hearts),
        ],
    );

    let winner = trick.winner().unwrap();
    assert_eq!(winner.seat, Seat::South);
    assert_eq!(winner.card, card(Face::Seven, Suit::Spades));
    assert_eq!(trick.lead(), Some(Suit::Hearts));
}

#[test]
fn ace_tops_the_lead_without_trump() {
    let trick = trick_of(
        None,
        Seat::East,
        [
            card(Face::King, Suit::Hearts),
            card(Face::Ten, Suit::Hearts),
            card(Face::Ace, Suit::Hearts),
            card(Face::Nine, Suit::Hearts),
        ],
    );

    let winner = trick.winner().unwrap();
    assert_eq!(winner.card, card(Face::Ace, Suit::Hearts));
    assert_eq!(winner.seat, Seat::West);
    assert_eq!(trick.points(), 4 + 10 + 11);
}

#[test]
fn jack_tops_the_trump_suit() {
    let trick = trick_of(
        Some(Suit::Clubs),
        Seat::North,
        [
            card(Face::Nine, Suit::Clubs),
            card(Face::Jack, Suit::Clubs),
            card(Face::Ace, Suit::Clubs),
            card(Face::King, Suit::Clubs),
        ],
    );

    assert_eq!(trick.winner().unwrap().card, card(Face::Jack, Suit::Clubs));
    assert_eq!(trick.points(), 14 + 20 + 11 + 4);
}

#[test]
fn off_suit_cards_never_win() {
    let trick = trick_of(
        None,
        Seat::North,
        [
            card(Face::Seven, Suit::Hearts),
            card(Face::Ace, Suit::Spades),
            card(Face::Ace, Suit::Clubs),
            card(Face::Ace, Suit::Diamonds),
        ],
    );

    assert_eq!(trick.winner().unwrap().seat, Seat::North);
}

#[test]
fn trick_walks_through_its_states() {
    let mut trick = Trick::new(None);
    assert_eq!(trick.state(), TrickState::Empty);
    assert_eq!(trick.next_seat(), None);

    trick.play(Seat::South, card(Face::Nine, Suit::Diamonds)).unwrap();
    assert_eq!(trick.state(), TrickState::InProgress);
    assert_eq!(trick.leader(), Some(Seat::South));
    assert_eq!(trick.next_seat(), Some(Seat::West));

    trick.play(Seat::West, card(Face::Ten, Suit::Diamonds)).unwrap();
    assert_eq!(
        trick.current_winner().unwrap().card,
        card(Face::Ten, Suit::Diamonds)
    );
    trick.play(Seat::North, card(Face::Eight, Suit::Diamonds)).unwrap();
    assert!(trick.winner().is_none());

    let winner = trick
        .play(Seat::East, card(Face::Seven, Suit::Clubs))
        .unwrap();
    assert_eq!(trick.state(), TrickState::Complete);
    assert_eq!(winner, trick.winner());
    assert_eq!(winner.unwrap().seat, Seat::West);
    assert_eq!(trick.next_seat(), None);
}

#[test]
fn trick_errors() {
    let mut trick = Trick::new(Some(Suit::Hearts));
    trick.play(Seat::North, card(Face::Seven, Suit::Hearts)).unwrap();

    assert_eq!(
        trick
            .play(Seat::North, card(Face::Eight, Suit::Hearts))
            .unwrap_err(),
        TrickError::OutOfTurn
    );
    assert_eq!(
        trick
            .play(Seat::South, card(Face::Eight, Suit::Hearts))
            .unwrap_err(),
        TrickError::OutOfTurn
    );
    assert_eq!(
        trick
            .play(Seat::East, card(Face::Seven, Suit::Hearts))
            .unwrap_err(),
        TrickError::DuplicateCard
    );
    // Rejected plays leave the trick untouched.
    assert_eq!(trick.plays().len(), 1);

    trick.play(Seat::East, card(Face::Eight, Suit::Hearts)).unwrap();
    trick.play(Seat::South, card(Face::Nine, Suit::Hearts)).unwrap();
    trick.play(Seat::West, card(Face::Ten, Suit::Hearts)).unwrap();
    assert_eq!(
        trick
            .play(Seat::North, card(Face::Jack, Suit::Hearts))
            .unwrap_err(),
        TrickError::AlreadyComplete
    );
}

#[test]
fn round_scores_only_after_eight_tricks() {
    let mut round = Round::new(None);
    let mut partial = Trick::new(None);
    partial.play(Seat::North, card(Face::Ace, Suit::Hearts)).unwrap();
    assert_eq!(
        round.record_trick(&partial).unwrap_err(),
        RoundError::TrickIncomplete
    );
    assert_eq!(
        round
            .record_trick(&trick_of(
                Some(Suit::Clubs),
                Seat::North,
                [
                    card(Face::Seven, Suit::Clubs),
                    card(Face::Eight, Suit::Clubs),
                    card(Face::Nine, Suit::Clubs),
                    card(Face::Ten, Suit::Clubs),
                ],
            ))
            .unwrap_err(),
        RoundError::TrumpMismatch
    );

    // Each trick is one face across all four suits, led by North in hearts.
    for face in Face::ALL {
        assert_eq!(round.final_scores().unwrap_err(), RoundError::Incomplete);
        let trick = trick_of(None, Seat::North, Suit::ALL.map(|s| card(face, s)));
        let winner = round.record_trick(&trick).unwrap();
        assert_eq!(winner.seat, Seat::North);
    }

    assert!(round.is_round_complete());
    let result = round.final_scores().unwrap();
    let total_tricks: u8 = Seat::ALL.iter().map(|&s| result.tricks_for(s)).sum();
    assert_eq!(total_tricks, 8);
    assert_eq!(result.tricks_for(Seat::North), 8);
    assert_eq!(result.sweep, Some(Team::NorthSouth));
    assert_eq!(result.total(Team::NorthSouth), 120 + 10);
    assert_eq!(result.total(Team::EastWest), 0);
    assert_eq!(result.leader(), Some(Team::NorthSouth));

    let extra = trick_of(
        None,
        Seat::North,
        Suit::ALL.map(|s| card(Face::Seven, s)),
    );
    assert_eq!(
        round.record_trick(&extra).unwrap_err(),
        RoundError::AlreadyComplete
    );
}

#[test]
fn full_round_with_one_suit_per_seat() {
    init_logging();
    let game_options = GameOptions::default().with_trump(Some(Suit::Hearts));
    let mut game = Game::new(game_options, 1);
    game.deal_with(suit_per_seat()).unwrap();

    for _ in 0..8 {
        for seat in Seat::ALL {
            assert_eq!(game.current_player(), Some(seat));
            game.play_by_index(seat, 1).unwrap();
        }
    }

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.current_player(), None);
    assert!(Seat::ALL.iter().all(|&s| game.hand(s).is_empty()));

    let result = game.final_scores().unwrap();
    let ns = result.score(Team::NorthSouth);
    assert_eq!(ns.tricks, 8);
    assert_eq!(ns.card_points, 62 + 30 * 3);
    assert_eq!(ns.last_trick_bonus, 10);
    assert_eq!(ns.baloot_bonus, 20);
    assert_eq!(ns.total(), 182);
    assert_eq!(game.round().baloot_holder(), Some(Seat::North));
}

#[test]
fn baloot_bonus_can_be_disabled() {
    let options = GameOptions::default()
        .with_trump(Some(Suit::Hearts))
        .with_baloot_bonus(false)
        .with_last_trick_bonus(0);
    let mut game = Game::new(options, 1);
    game.deal_with(suit_per_seat()).unwrap();

    while let Some(seat) = game.current_player() {
        game.auto_play(seat).unwrap();
    }

    let ns = game.final_scores().unwrap().score(Team::NorthSouth);
    assert_eq!(ns.baloot_bonus, 0);
    assert_eq!(ns.last_trick_bonus, 0);
    assert_eq!(ns.total(), 152);
}

#[test]
fn random_round_totals_every_card_point() {
    init_logging();
    for seed in 0..20 {
        let options = GameOptions::default().with_trump(Some(Suit::Diamonds));
        let mut game = Game::new(options, seed);
        game.deal().unwrap();
        assert_eq!(game.cards_remaining(), 0);

        while let Some(seat) = game.current_player() {
            game.auto_play(seat).unwrap();
        }

        let result = game.final_scores().unwrap();
        let ns = result.score(Team::NorthSouth);
        let ew = result.score(Team::EastWest);
        assert_eq!(ns.tricks + ew.tricks, 8);
        assert_eq!(ns.card_points + ew.card_points, 152);
        assert_eq!(ns.last_trick_bonus + ew.last_trick_bonus, 10);
        assert!(ns.baloot_bonus + ew.baloot_bonus <= 20);
        assert_eq!(game.round().tricks().len(), 8);
    }
}

#[test]
fn same_seed_replays_the_same_round() {
    let run = |seed| {
        let mut game = Game::new(GameOptions::default().with_follow_suit(true), seed);
        game.deal().unwrap();
        let north = game.hand(Seat::North).clone();
        while let Some(seat) = game.current_player() {
            game.auto_play(seat).unwrap();
        }
        (north, game.round().tricks().to_vec())
    };

    assert_eq!(run(9), run(9));
    assert_ne!(run(9).0, run(10).0);
}

#[test]
fn play_errors() {
    let mut game = Game::new(GameOptions::default(), 5);
    let seven_hearts = card(Face::Seven, Suit::Hearts);

    assert_eq!(
        game.play(Seat::North, seven_hearts).unwrap_err(),
        PlayError::InvalidState
    );

    game.deal_with(suit_per_seat()).unwrap();
    assert_eq!(
        game.play(Seat::East, card(Face::Seven, Suit::Diamonds))
            .unwrap_err(),
        PlayError::NotYourTurn
    );
    assert_eq!(
        game.play(Seat::North, card(Face::Seven, Suit::Spades))
            .unwrap_err(),
        PlayError::Hand(HandError::CardNotInHand)
    );
    assert_eq!(
        game.play_by_index(Seat::North, 9).unwrap_err(),
        PlayError::Hand(HandError::IndexOutOfRange { index: 9, len: 8 })
    );
    assert_eq!(
        game.play_by_index(Seat::North, 0).unwrap_err(),
        PlayError::Hand(HandError::IndexOutOfRange { index: 0, len: 8 })
    );

    // Failed plays change nothing.
    assert_eq!(game.hand(Seat::North).len(), 8);
    assert_eq!(game.current_player(), Some(Seat::North));

    let outcome = game.play(Seat::North, seven_hearts).unwrap();
    assert_eq!(outcome.card, seven_hearts);
    assert!(outcome.trick_winner.is_none());
    assert!(!game.hand(Seat::North).contains(seven_hearts));
    assert_eq!(game.current_player(), Some(Seat::East));
}

#[test]
fn follow_suit_is_enforced_when_enabled() {
    let mut hands = suit_per_seat();
    let seven_hearts = card(Face::Seven, Suit::Hearts);
    let seven_diamonds = card(Face::Seven, Suit::Diamonds);
    hands[0].remove(seven_hearts).unwrap();
    hands[0].add_card(seven_diamonds);
    hands[1].remove(seven_diamonds).unwrap();
    hands[1].add_card(seven_hearts);

    let mut game = Game::new(GameOptions::default().with_follow_suit(true), 2);
    game.deal_with(hands).unwrap();

    game.play(Seat::North, card(Face::Ace, Suit::Hearts)).unwrap();
    assert_eq!(game.legal_moves(Seat::East), vec![seven_hearts]);
    assert_eq!(
        game.play(Seat::East, card(Face::Ace, Suit::Diamonds))
            .unwrap_err(),
        PlayError::MustFollowSuit
    );
    game.play(Seat::East, seven_hearts).unwrap();
    // South holds no hearts and may discard anything.
    assert_eq!(game.legal_moves(Seat::South).len(), 8);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 4);

    let mut short = suit_per_seat();
    short[2] = hand_of(&[card(Face::Ace, Suit::Clubs)]);
    assert_eq!(game.deal_with(short).unwrap_err(), DealError::InvalidHands);

    let mut repeated = suit_per_seat();
    repeated[3] = repeated[0].clone();
    assert_eq!(
        game.deal_with(repeated).unwrap_err(),
        DealError::InvalidHands
    );
    assert_eq!(game.state(), GameState::WaitingForDeal);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn clear_round_allows_another_deal() {
    let mut game = Game::new(GameOptions::default().with_first_leader(Seat::West), 8);
    game.deal().unwrap();
    assert_eq!(game.current_player(), Some(Seat::West));
    while let Some(seat) = game.current_player() {
        game.auto_play(seat).unwrap();
    }
    assert!(game.final_scores().is_ok());

    game.clear_round();
    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.final_scores().unwrap_err(), RoundError::Incomplete);
    assert!(game.hand(Seat::North).is_empty());

    game.deal().unwrap();
    assert_eq!(game.hand(Seat::North).len(), 8);
    assert_eq!(game.current_player(), Some(Seat::West));
}

#[test]
fn parse_choice_validates_human_input() {
    assert_eq!(parse_choice("1", 8), Ok(1));
    assert_eq!(parse_choice(" 8 \n", 8), Ok(8));
    assert_eq!(parse_choice("abc", 8), Err(HandError::InputParse));
    assert_eq!(parse_choice("-1", 8), Err(HandError::InputParse));
    assert_eq!(
        parse_choice("0", 8),
        Err(HandError::IndexOutOfRange { index: 0, len: 8 })
    );
    assert_eq!(
        parse_choice("9", 8),
        Err(HandError::IndexOutOfRange { index: 9, len: 8 })
    );
}

#[test]
fn seats_rotate_and_pair_up() {
    let order: Vec<Seat> = Seat::East.rotation().collect();
    assert_eq!(order, [Seat::East, Seat::South, Seat::West, Seat::North]);
    assert_eq!(Seat::West.next(), Seat::North);
    assert_eq!(Seat::North.partner(), Seat::South);
    assert_eq!(Seat::East.team(), Team::EastWest);
    assert_eq!(Seat::South.team(), Team::NorthSouth);
    assert_eq!(Team::NorthSouth.other(), Team::EastWest);
}

#[test]
fn round_rejects_cards_recorded_twice() {
    let mut round = Round::new(None);
    let aces = trick_of(None, Seat::North, Suit::ALL.map(|s| card(Face::Ace, s)));
    round.record_trick(&aces).unwrap();

    assert_eq!(
        round.record_trick(&aces).unwrap_err(),
        RoundError::CardAlreadyRecorded
    );

    // One repeated card is enough to reject the trick.
    let mixed = trick_of(
        None,
        Seat::East,
        [
            card(Face::King, Suit::Hearts),
            card(Face::King, Suit::Diamonds),
            card(Face::Ace, Suit::Clubs),
            card(Face::King, Suit::Spades),
        ],
    );
    assert_eq!(
        round.record_trick(&mixed).unwrap_err(),
        RoundError::CardAlreadyRecorded
    );

    assert_eq!(round.tricks().len(), 1);
    assert_eq!(round.card_points(Team::NorthSouth), 44);
    assert!(round.is_recorded(card(Face::Ace, Suit::Spades)));
    assert!(!round.is_recorded(card(Face::King, Suit::Spades)));
}

#[test]
fn hand_play_by_index_validates_the_choice() {
    let ace = card(Face::Ace, Suit::Hearts);
    let mut hand = hand_of(&[ace]);

    assert_eq!(
        hand.play_by_index(0).unwrap_err(),
        HandError::IndexOutOfRange { index: 0, len: 1 }
    );
    assert_eq!(
        hand.play_by_index(2).unwrap_err(),
        HandError::IndexOutOfRange { index: 2, len: 1 }
    );
    assert_eq!(hand.len(), 1);

    assert_eq!(hand.play_by_index(1), Ok(ace));
    assert!(hand.is_empty());
    assert_eq!(
        hand.play_by_index(1).unwrap_err(),
        HandError::IndexOutOfRange { index: 1, len: 0 }
    );
}

#[test]
fn deck_prints_four_cards_per_row() {
    let text = Deck::new().to_string();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 8);
    assert!(rows[0].starts_with("7 of Hearts"));
    assert!(rows[0].contains("7 of Spades"));
    assert!(rows[7].starts_with("Ace of Hearts"));
    assert_eq!(text.matches(" of ").count(), DECK_SIZE);
}
