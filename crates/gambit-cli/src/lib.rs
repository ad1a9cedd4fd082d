//! Console front end: move sources and the interactive session loop.

mod error;
mod player;
mod session;

pub use error::SessionError;
pub use player::{Computer, DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME, Human, MoveSource, PlayerIds};
pub use session::{Session, is_valid_player_input};
