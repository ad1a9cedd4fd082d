//! The turn controller: wires move sources to the rules engine.
//!
//! A session owns the game and one [`MoveSource`] per side. Each turn it
//! asks the side to move for a proposal, validates it, and either plays
//! it or reports why it was rejected and asks again.

use tracing::{debug, info, warn};

use gambit_core::{Color, Coord, Game, GameError, GameState, Player, Square};

use crate::error::SessionError;
use crate::player::{Computer, DEFAULT_COMPUTER_NAME, Human, MoveSource, PlayerIds};

/// Shown when input does not name two board squares.
const INVALID_INPUT_MSG: &str = "That isn't valid input, type your move as two squares \
(e.g. \"e2 e4\") using \"abcdefgh\" for the files and \"12345678\" for the ranks.";

/// Shown when a well-formed move is rejected by the rules.
const INVALID_MOVE_MSG: &str = "This isn't a valid move - ensure that the move you are \
typing is feasible for the piece you are using.";

/// Check that a token names a board square: one file letter and one
/// rank digit, case-insensitive.
pub fn is_valid_player_input(input: &str) -> bool {
    parse_square(input).is_some()
}

fn parse_square(input: &str) -> Option<Coord> {
    let lowered = input.to_ascii_lowercase();
    Square::from_algebraic(&lowered).map(Square::coord)
}

/// A console chess session between two move sources.
pub struct Session {
    game: Game,
    /// Indexed by [`Color::index`].
    sources: [Box<dyn MoveSource>; Color::COUNT],
    /// Every move played, as the (from, to) square names that were typed.
    moves: Vec<(String, String)>,
}

impl Session {
    /// Create a session from a prepared game and two move sources.
    pub fn new(game: Game, white: Box<dyn MoveSource>, black: Box<dyn MoveSource>) -> Session {
        Session {
            game,
            sources: [white, black],
            moves: Vec::new(),
        }
    }

    /// Create a standard game between a named human (White) and the
    /// computer (Black).
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the game cannot be constructed.
    pub fn human_vs_computer(name: impl Into<String>) -> Result<Session, GameError> {
        let mut ids = PlayerIds::new();
        let white = Player::new(ids.next_id(), name, Color::White);
        let black = Player::new(ids.next_id(), DEFAULT_COMPUTER_NAME, Color::Black);
        let mut game = Game::new(white, black)?;
        game.setup_default_board();
        Ok(Session::new(
            game,
            Box::new(Human::new()),
            Box::new(Computer::new()),
        ))
    }

    /// Create a standard game between two named humans.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the game cannot be constructed.
    pub fn human_vs_human(
        white_name: impl Into<String>,
        black_name: impl Into<String>,
    ) -> Result<Session, GameError> {
        let mut ids = PlayerIds::new();
        let white = Player::new(ids.next_id(), white_name, Color::White);
        let black = Player::new(ids.next_id(), black_name, Color::Black);
        let mut game = Game::new(white, black)?;
        game.setup_default_board();
        Ok(Session::new(game, Box::new(Human::new()), Box::new(Human::new())))
    }

    /// Return the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the log of moves played so far.
    pub fn moves(&self) -> &[(String, String)] {
        &self.moves
    }

    /// Play one full turn: ask the side to move until it produces a
    /// valid move, execute it, and hand over the turn.
    ///
    /// Returns the game state facing the next player.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] if the game has already
    /// ended, or an error from the move source.
    pub fn play_turn(&mut self) -> Result<GameState, SessionError> {
        if self.game.game_state().is_over() {
            return Err(SessionError::GameOver {
                state: self.game.game_state(),
            });
        }

        loop {
            let side = self.game.current_color();
            let (from, to) = self.sources[side.index()].propose_move(&self.game)?;

            let (Some(start), Some(end)) = (parse_square(&from), parse_square(&to)) else {
                warn!(%from, %to, "malformed move input");
                println!("{INVALID_INPUT_MSG}");
                continue;
            };

            let verdict = self.game.is_valid_move(start, end);
            if !verdict.is_valid() {
                debug!(%from, %to, %verdict, "move rejected");
                println!("{INVALID_MOVE_MSG} ({verdict})");
                continue;
            }

            if let Some((taken, at)) = self.game.play_move(start, end)? {
                println!("{side} captures the {} {} on {at}", taken.color(), taken.kind());
            }
            self.moves.push((from, to));
            self.game.swap_current_player();
            return Ok(self.game.game_state());
        }
    }

    /// Run the session to completion, printing the board between turns.
    ///
    /// Returns the terminal state.
    ///
    /// # Errors
    ///
    /// Propagates any [`SessionError`] from the turn loop.
    pub fn run(&mut self) -> Result<GameState, SessionError> {
        info!(
            white = %self.game.player(Color::White).name(),
            black = %self.game.player(Color::Black).name(),
            "session started"
        );

        loop {
            println!("\n{}\n", self.game.pretty());

            let state = self.game.game_state();
            if state.is_over() {
                break;
            }
            if state == GameState::Check {
                println!("{} is in check!", self.game.current_player());
            }

            self.play_turn()?;
        }

        let state = self.game.game_state();
        match state {
            GameState::Checkmate => {
                let winner = self.game.player(self.game.current_color().flip());
                println!("Checkmate! {winner} wins in {} moves.", self.moves.len());
            }
            GameState::Stalemate => println!("Stalemate. The game is a draw."),
            _ => {}
        }
        info!(%state, moves = self.moves.len(), "session finished");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gambit_core::{Color, Game, GameState, Player, PlayerId};

    use super::{Session, is_valid_player_input};
    use crate::error::SessionError;
    use crate::player::MoveSource;

    /// A move source that replays a fixed script.
    struct Scripted {
        moves: VecDeque<(String, String)>,
    }

    impl Scripted {
        fn new(moves: &[(&str, &str)]) -> Scripted {
            Scripted {
                moves: moves
                    .iter()
                    .map(|&(f, t)| (f.to_string(), t.to_string()))
                    .collect(),
            }
        }
    }

    impl MoveSource for Scripted {
        fn propose_move(&mut self, _game: &Game) -> Result<(String, String), SessionError> {
            self.moves.pop_front().ok_or(SessionError::InputClosed)
        }
    }

    fn standard_game() -> Game {
        let white = Player::new(PlayerId::new(1), "W", Color::White);
        let black = Player::new(PlayerId::new(2), "B", Color::Black);
        let mut game = Game::new(white, black).unwrap();
        game.setup_default_board();
        game
    }

    #[test]
    fn input_validation_is_case_insensitive() {
        assert!(is_valid_player_input("e2"));
        assert!(is_valid_player_input("E2"));
        assert!(is_valid_player_input("h8"));
        assert!(!is_valid_player_input("i2"));
        assert!(!is_valid_player_input("e9"));
        assert!(!is_valid_player_input("e"));
        assert!(!is_valid_player_input("e22"));
        assert!(!is_valid_player_input(""));
    }

    #[test]
    fn scripted_fools_mate_runs_to_checkmate() {
        let white = Scripted::new(&[("f2", "f3"), ("g2", "g4")]);
        let black = Scripted::new(&[("e7", "e5"), ("d8", "h4")]);
        let mut session = Session::new(standard_game(), Box::new(white), Box::new(black));

        let state = session.run().unwrap();
        assert_eq!(state, GameState::Checkmate);
        assert_eq!(session.moves().len(), 4);
    }

    #[test]
    fn invalid_proposals_are_retried_within_the_turn() {
        let white = Scripted::new(&[
            ("not", "input"),
            ("e2", "e9"),
            ("e2", "e7"),
            ("e2", "e4"),
        ]);
        let black = Scripted::new(&[]);
        let mut session = Session::new(standard_game(), Box::new(white), Box::new(black));

        let state = session.play_turn().unwrap();
        assert_eq!(state, GameState::Normal);
        // Only the move that was actually played is logged.
        assert_eq!(session.moves(), [("e2".to_string(), "e4".to_string())]);
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let white = Scripted::new(&[("E2", "E4")]);
        let black = Scripted::new(&[]);
        let mut session = Session::new(standard_game(), Box::new(white), Box::new(black));

        session.play_turn().unwrap();
        assert!(session.game().get_location((3, 4)).unwrap().is_some());
    }

    #[test]
    fn play_turn_after_the_game_ends_is_an_error() {
        let white = Scripted::new(&[("f2", "f3"), ("g2", "g4")]);
        let black = Scripted::new(&[("e7", "e5"), ("d8", "h4")]);
        let mut session = Session::new(standard_game(), Box::new(white), Box::new(black));
        session.run().unwrap();

        assert!(matches!(
            session.play_turn(),
            Err(SessionError::GameOver {
                state: GameState::Checkmate
            })
        ));
    }

    #[test]
    fn exhausted_source_surfaces_input_closed() {
        let white = Scripted::new(&[]);
        let black = Scripted::new(&[]);
        let mut session = Session::new(standard_game(), Box::new(white), Box::new(black));

        assert!(matches!(
            session.play_turn(),
            Err(SessionError::InputClosed)
        ));
    }
}
