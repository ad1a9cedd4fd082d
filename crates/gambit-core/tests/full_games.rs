//! Integration tests driving whole games through the public API.
//!
//! Each scenario plays real move sequences (validate, execute, swap)
//! and checks the derived game state, the way a front end would.

use gambit_core::{Color, Coord, Game, GameState, MoveVerdict, PieceKind, Player, PlayerId, Square};

fn new_game() -> Game {
    let white = Player::new(PlayerId::new(1), "White", Color::White);
    let black = Player::new(PlayerId::new(2), "Black", Color::Black);
    let mut game = Game::new(white, black).expect("distinct colors");
    game.setup_default_board();
    game
}

fn coord(name: &str) -> Coord {
    Square::from_algebraic(name)
        .unwrap_or_else(|| panic!("bad square {name}"))
        .coord()
}

/// Validate, play, and hand over the turn, as the session loop does.
fn play(game: &mut Game, from: &str, to: &str) {
    let verdict = game.is_valid_move(coord(from), coord(to));
    assert_eq!(
        verdict,
        MoveVerdict::Valid,
        "{from}->{to} rejected: {verdict}"
    );
    game.play_move(coord(from), coord(to)).expect("validated move");
    game.swap_current_player();
}

// ── Checkmate ─────────────────────────────────────────────────────────────────

#[test]
fn fools_mate_ends_in_checkmate() {
    let mut game = new_game();

    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");

    assert_eq!(game.current_color(), Color::White);
    assert_eq!(game.game_state(), GameState::Checkmate);
    assert!(game.game_state().is_over());
    assert!(game.is_in_checkmate());
}

#[test]
fn scholars_mate_ends_in_checkmate() {
    let mut game = new_game();

    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "f1", "c4");
    play(&mut game, "b8", "c6");
    play(&mut game, "d1", "h5");
    play(&mut game, "g8", "f6");
    play(&mut game, "h5", "f7");

    assert_eq!(game.game_state(), GameState::Checkmate);
    assert!(game.is_in_checkmate());
}

// ── Check and recovery ────────────────────────────────────────────────────────

#[test]
fn check_must_be_answered() {
    let mut game = new_game();

    play(&mut game, "e2", "e4");
    play(&mut game, "d7", "d5");
    play(&mut game, "e4", "d5");
    play(&mut game, "d8", "d5");
    // White knight pins nothing yet; black queen on d5 eyes nothing
    // fatal, but Bb5+ gives check.
    play(&mut game, "b1", "c3");
    play(&mut game, "d5", "d8");
    play(&mut game, "f1", "b5");

    assert_eq!(game.game_state(), GameState::Check);
    assert!(game.is_in_check());
    assert!(!game.game_state().is_over());

    // A move that ignores the check is rejected.
    assert_eq!(
        game.is_valid_move(coord("a7"), coord("a6")),
        MoveVerdict::SelfCheck
    );

    // Blocking the check is accepted and play continues.
    play(&mut game, "c7", "c6");
    assert_eq!(game.game_state(), GameState::Normal);
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn kingside_castle_in_a_real_opening() {
    let mut game = new_game();

    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "g1", "f3");
    play(&mut game, "b8", "c6");
    play(&mut game, "f1", "c4");
    play(&mut game, "f8", "c5");
    play(&mut game, "e1", "g1");

    let king = game.get_location(coord("g1")).unwrap().expect("king castled");
    assert_eq!(king.kind(), PieceKind::King);
    let rook = game.get_location(coord("f1")).unwrap().expect("rook followed");
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert!(game.get_location(coord("h1")).unwrap().is_none());
    assert!(game.get_location(coord("e1")).unwrap().is_none());

    // Black can mirror the maneuver.
    play(&mut game, "g8", "f6");
    play(&mut game, "d2", "d3");
    play(&mut game, "e8", "g8");
    assert_eq!(
        game.get_location(coord("g8")).unwrap().expect("king").kind(),
        PieceKind::King
    );
}

// ── En passant ────────────────────────────────────────────────────────────────

#[test]
fn en_passant_in_a_real_game() {
    let mut game = new_game();

    play(&mut game, "e2", "e4");
    play(&mut game, "a7", "a6");
    play(&mut game, "e4", "e5");
    play(&mut game, "d7", "d5");

    // The black pawn just skipped d6; white may capture in passing.
    assert_eq!(
        game.en_passant_target(),
        Some(Square::from_algebraic("d6").unwrap())
    );
    play(&mut game, "e5", "d6");

    assert!(
        game.get_location(coord("d5")).unwrap().is_none(),
        "the passed pawn should be gone"
    );
    assert_eq!(
        game.get_location(coord("d6")).unwrap().expect("capturer").kind(),
        PieceKind::Pawn
    );
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn en_passant_declined_is_gone_next_turn() {
    let mut game = new_game();

    play(&mut game, "e2", "e4");
    play(&mut game, "a7", "a6");
    play(&mut game, "e4", "e5");
    play(&mut game, "d7", "d5");

    // White plays something else; the window closes.
    play(&mut game, "h2", "h3");
    play(&mut game, "a6", "a5");
    assert_eq!(game.en_passant_target(), None);
    assert_eq!(
        game.is_valid_move(coord("e5"), coord("d6")),
        MoveVerdict::Illegal
    );
}

// ── Stalemate ─────────────────────────────────────────────────────────────────

#[test]
fn bare_kings_and_queen_stalemate() {
    let white = Player::new(PlayerId::new(1), "White", Color::White);
    let black = Player::new(PlayerId::new(2), "Black", Color::Black);
    let mut game = Game::new(white, black).expect("distinct colors");

    game.add_piece(PieceKind::King, Color::Black, coord("h8")).unwrap();
    game.add_piece(PieceKind::King, Color::White, coord("f7")).unwrap();
    game.add_piece(PieceKind::Queen, Color::White, coord("g6")).unwrap();

    game.swap_current_player();
    assert_eq!(game.current_color(), Color::Black);
    assert_eq!(game.game_state(), GameState::Stalemate);
    assert!(game.game_state().is_over());
    assert!(!game.is_in_check());
}

// ── Rejections surface before anything mutates ────────────────────────────────

#[test]
fn rejected_moves_leave_the_game_untouched() {
    let game = new_game();

    for (from, to, expected) in [
        ("e4", "e5", MoveVerdict::NoPiece),
        ("d7", "d6", MoveVerdict::WrongPlayer),
        ("a1", "a4", MoveVerdict::Blocked),
        ("b1", "b3", MoveVerdict::Illegal),
    ] {
        assert_eq!(game.is_valid_move(coord(from), coord(to)), expected);
    }
    assert_eq!(game.is_valid_move((1, 4), (8, 4)), MoveVerdict::OutOfBounds);

    assert_eq!(game.board().piece_count(), 32);
    assert_eq!(game.current_color(), Color::White);
    assert_eq!(game.game_state(), GameState::Normal);
}
