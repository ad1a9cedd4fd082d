//! Move sources: where each side's moves come from.
//!
//! A [`MoveSource`] produces raw move proposals as text; the session
//! validates them against the rules. Humans type, the computer scans.

use std::io::BufRead;

use tracing::debug;

use gambit_core::{Game, PlayerId, Square};

use crate::error::SessionError;

/// Default display name for a human player.
pub const DEFAULT_HUMAN_NAME: &str = "Human";

/// Default display name for the computer player.
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";

/// Hands out unique player ids for one process.
#[derive(Debug, Default)]
pub struct PlayerIds {
    next: u32,
}

impl PlayerIds {
    /// Create a generator starting at id 1.
    pub fn new() -> PlayerIds {
        PlayerIds::default()
    }

    /// Return the next unused id.
    pub fn next_id(&mut self) -> PlayerId {
        self.next += 1;
        PlayerId::new(self.next)
    }
}

/// A source of move proposals for one side.
///
/// Proposals are raw square names ("e2", "e4"); format and rule
/// validation happen in the session, which re-asks after a rejection.
pub trait MoveSource {
    /// Produce the next move proposal as (from, to) square names.
    fn propose_move(&mut self, game: &Game) -> Result<(String, String), SessionError>;
}

/// A human player reading moves from an input stream.
pub struct Human {
    input: Box<dyn BufRead>,
}

impl Human {
    /// Create a human player reading from stdin.
    pub fn new() -> Human {
        Human {
            input: Box::new(std::io::BufReader::new(std::io::stdin())),
        }
    }

    /// Create a human player reading from the given stream.
    pub fn with_input(input: Box<dyn BufRead>) -> Human {
        Human { input }
    }
}

impl Default for Human {
    fn default() -> Human {
        Human::new()
    }
}

impl MoveSource for Human {
    fn propose_move(&mut self, game: &Game) -> Result<(String, String), SessionError> {
        println!("{}, enter your move (e.g. e2 e4):", game.current_player());

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let mut tokens = line.split_whitespace();
        let from = tokens.next().unwrap_or_default().to_string();
        let to = tokens.next().unwrap_or_default().to_string();
        Ok((from, to))
    }
}

/// A computer player proposing the first valid move it finds.
///
/// Scans every from/to square pair in board order. Not a strong
/// opponent, but it never proposes an invalid move while one exists.
#[derive(Debug, Default)]
pub struct Computer;

impl Computer {
    /// Create a computer player.
    pub fn new() -> Computer {
        Computer
    }
}

impl MoveSource for Computer {
    fn propose_move(&mut self, game: &Game) -> Result<(String, String), SessionError> {
        for from in Square::all() {
            for to in Square::all() {
                if game.is_valid_move(from.coord(), to.coord()).is_valid() {
                    debug!(%from, %to, "computer chose a move");
                    return Ok((from.to_string(), to.to_string()));
                }
            }
        }
        // No valid move exists; the game state is terminal and the
        // session should have stopped asking.
        Err(SessionError::GameOver {
            state: game.game_state(),
        })
    }
}
