use super::*;

fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
    Card {
        suit,
        rank,
        face_up,
    }
}

fn empty_game() -> KlondikeGame {
    KlondikeGame {
        draw_mode: DrawMode::One,
        stock: Vec::new(),
        waste: Vec::new(),
        foundations: std::array::from_fn(|_| Vec::new()),
        tableau: std::array::from_fn(|_| Vec::new()),
    }
}

fn all_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(card(suit, rank, true));
        }
    }
    cards
}

#[test]
fn new_game_has_full_deck_accounted_for() {
    let game = KlondikeGame::new_shuffled();

    let tableau_count: usize = game.tableau.iter().map(Vec::len).sum();
    let foundations_count: usize = game.foundations.iter().map(Vec::len).sum();
    let total = game.stock.len() + game.waste.len() + foundations_count + tableau_count;

    assert_eq!(total, 52);
    assert_eq!(tableau_count, 28);
    assert_eq!(game.stock.len(), 24);
    assert_eq!(game.waste.len(), 0);
    assert_eq!(foundations_count, 0);
}

#[test]
fn new_game_deals_klondike_layout() {
    let game = KlondikeGame::new_with_seed(7);

    for (col, pile) in game.tableau.iter().enumerate() {
        assert_eq!(pile.len(), col + 1);
        for (row, card) in pile.iter().enumerate() {
            assert_eq!(card.face_up, row == col, "col {} row {}", col, row);
        }
    }
    assert!(game.stock.iter().all(|card| !card.face_up));
}

#[test]
fn new_game_deals_unique_cards() {
    let game = KlondikeGame::new_with_seed(99);

    let mut seen = std::collections::HashSet::new();
    for pile in game.tableau.iter().chain(std::iter::once(&game.stock)) {
        for card in pile {
            assert!(seen.insert((card.suit, card.rank)));
        }
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn seeded_games_are_deterministic() {
    let game_a = KlondikeGame::new_with_seed(42);
    let game_b = KlondikeGame::new_with_seed(42);
    let game_c = KlondikeGame::new_with_seed(43);

    assert_eq!(game_a, game_b);
    assert_ne!(game_a, game_c);
}

#[test]
fn draw_moves_one_card_from_stock_to_waste_face_up() {
    let mut game = empty_game();
    game.stock.push(card(Suit::Spades, 7, false));

    let result = game.draw_or_recycle();

    assert_eq!(result, DrawResult::DrewFromStock);
    assert_eq!(game.stock.len(), 0);
    assert_eq!(game.waste.len(), 1);
    assert!(game.waste[0].face_up);
    assert_eq!(game.waste[0].rank, 7);
}

#[test]
fn stock_waste_cycle_preserves_order_across_recycle() {
    // Stock [A, B, C] bottom-to-top: repeated draws yield waste [C, B, A],
    // and the recycle restores the stock exactly as it started.
    let mut game = empty_game();
    let a = card(Suit::Clubs, 2, false);
    let b = card(Suit::Diamonds, 9, false);
    let c = card(Suit::Spades, 11, false);
    game.stock.extend([a, b, c]);

    assert_eq!(game.draw_or_recycle(), DrawResult::DrewFromStock);
    assert_eq!(game.waste.last().map(|w| w.rank), Some(11));
    assert_eq!(game.draw_or_recycle(), DrawResult::DrewFromStock);
    assert_eq!(game.draw_or_recycle(), DrawResult::DrewFromStock);
    assert!(game.stock.is_empty());
    assert!(game.waste.iter().all(|w| w.face_up));
    assert_eq!(
        game.waste.iter().map(|w| w.rank).collect::<Vec<_>>(),
        vec![11, 9, 2]
    );

    assert_eq!(game.draw_or_recycle(), DrawResult::RecycledWaste);
    assert!(game.waste.is_empty());
    assert!(game.stock.iter().all(|s| !s.face_up));
    assert_eq!(
        game.stock.iter().map(|s| s.rank).collect::<Vec<_>>(),
        vec![2, 9, 11]
    );
}

#[test]
fn draw_on_empty_stock_and_waste_is_a_no_op() {
    let mut game = empty_game();
    assert_eq!(game.draw_or_recycle(), DrawResult::NoOp);
}

#[test]
fn draw_three_takes_up_to_three_cards() {
    let mut game = empty_game();
    game.set_draw_mode(DrawMode::Three);
    game.stock.push(card(Suit::Clubs, 1, false));
    game.stock.push(card(Suit::Diamonds, 2, false));
    game.stock.push(card(Suit::Hearts, 3, false));
    game.stock.push(card(Suit::Spades, 4, false));

    assert_eq!(game.draw_or_recycle(), DrawResult::DrewFromStock);
    assert_eq!(game.stock.len(), 1);
    assert_eq!(game.waste.len(), 3);

    assert_eq!(game.draw_or_recycle(), DrawResult::DrewFromStock);
    assert_eq!(game.stock.len(), 0);
    assert_eq!(game.waste.len(), 4);
    assert!(game.waste.iter().all(|card| card.face_up));
}

#[test]
fn tableau_rule_full_truth_table() {
    // Empty pile: kings only. Occupied pile: opposite color, one rank down.
    for moving in all_cards() {
        assert_eq!(can_stack_tableau(None, moving), moving.rank == 13);
        for top in all_cards() {
            let expected =
                top.color_red() != moving.color_red() && moving.rank == top.rank - 1;
            assert_eq!(
                can_stack_tableau(Some(&top), moving),
                expected,
                "{} on {}",
                moving.label(),
                top.label()
            );
        }
    }
}

#[test]
fn foundation_rule_full_truth_table() {
    // Empty pile: aces only. Occupied pile: same suit, one rank up.
    for moving in all_cards() {
        assert_eq!(can_stack_foundation(None, moving), moving.rank == 1);
        for top in all_cards() {
            let expected = top.suit == moving.suit && moving.rank == top.rank + 1;
            assert_eq!(
                can_stack_foundation(Some(&top), moving),
                expected,
                "{} on {}",
                moving.label(),
                top.label()
            );
        }
    }
}

#[test]
fn find_auto_foundation_prefers_lowest_index() {
    let mut game = empty_game();
    let ace = card(Suit::Hearts, 1, true);
    assert_eq!(game.find_auto_foundation(ace), Some(0));

    game.foundations[0].push(card(Suit::Spades, 1, true));
    assert_eq!(game.find_auto_foundation(ace), Some(1));

    let two = card(Suit::Spades, 2, true);
    assert_eq!(game.find_auto_foundation(two), Some(0));

    let off_suit = card(Suit::Clubs, 2, true);
    assert_eq!(game.find_auto_foundation(off_suit), None);
}

#[test]
fn move_slice_moves_run_and_conserves_cards() {
    let mut game = empty_game();
    game.tableau[0].push(card(Suit::Spades, 9, false));
    game.tableau[0].push(card(Suit::Hearts, 8, true));
    game.tableau[0].push(card(Suit::Clubs, 7, true));
    game.tableau[1].push(card(Suit::Clubs, 9, true));

    assert!(game.move_slice(PileId::Tableau(0), PileId::Tableau(1), 1));

    assert_eq!(game.tableau[0].len(), 1);
    assert_eq!(game.tableau[1].len(), 3);
    assert_eq!(game.tableau[1][1], card(Suit::Hearts, 8, true));
    assert_eq!(game.tableau[1][2], card(Suit::Clubs, 7, true));
}

#[test]
fn move_slice_reveals_new_top_card() {
    let mut game = empty_game();
    game.tableau[2].push(card(Suit::Diamonds, 4, false));
    game.tableau[2].push(card(Suit::Clubs, 3, true));
    game.foundations[0].push(card(Suit::Clubs, 2, true));

    assert!(game.move_slice(PileId::Tableau(2), PileId::Foundation(0), 1));
    assert!(game.tableau[2][0].face_up);
}

#[test]
fn move_slice_handles_emptied_source_pile() {
    let mut game = empty_game();
    game.tableau[3].push(card(Suit::Hearts, 13, true));

    assert!(game.move_slice(PileId::Tableau(3), PileId::Tableau(4), 0));
    assert!(game.tableau[3].is_empty());
    assert_eq!(game.tableau[4].len(), 1);
}

#[test]
fn move_slice_rejects_bad_arguments() {
    let mut game = empty_game();
    game.waste.push(card(Suit::Hearts, 5, true));

    assert!(!game.move_slice(PileId::Waste, PileId::Waste, 0));
    assert!(!game.move_slice(PileId::Waste, PileId::Tableau(0), 1));
    assert!(!game.move_slice(PileId::Tableau(0), PileId::Tableau(1), 0));
    assert!(!game.move_slice(PileId::Tableau(9), PileId::Tableau(1), 0));
    assert!(!game.move_slice(PileId::Waste, PileId::Foundation(6), 0));
    assert_eq!(game.waste.len(), 1);
}

#[test]
fn is_won_requires_kings_on_all_foundations() {
    let mut game = empty_game();
    assert!(!game.is_won());

    for (idx, suit) in Suit::ALL.iter().enumerate() {
        game.foundations[idx].push(card(*suit, 13, true));
    }
    assert!(game.is_won());

    game.foundations[3].pop();
    game.foundations[3].push(card(Suit::Spades, 12, true));
    assert!(!game.is_won());
}

#[test]
fn card_flip_toggles_only_face_state() {
    let mut c = card(Suit::Diamonds, 12, false);
    c.flip();
    assert!(c.face_up);
    assert_eq!(c.suit, Suit::Diamonds);
    assert_eq!(c.rank, 12);
    c.flip();
    assert!(!c.face_up);
}

#[test]
fn rank_labels_are_correct() {
    assert_eq!(rank_label(1), "A");
    assert_eq!(rank_label(10), "10");
    assert_eq!(rank_label(11), "J");
    assert_eq!(rank_label(12), "Q");
    assert_eq!(rank_label(13), "K");
    assert_eq!(rank_label(0), "?");
    assert_eq!(card(Suit::Hearts, 1, true).label(), "AH");
}
