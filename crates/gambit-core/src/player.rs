//! Player identity: an id, a display name, and an assigned color.
//!
//! Ids are handed out by whoever constructs players (the session layer
//! owns the generator); the core only stores them.

use std::fmt;

use crate::color::Color;

/// Opaque player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Wrap a raw id value.
    #[inline]
    pub const fn new(raw: u32) -> PlayerId {
        PlayerId(raw)
    }

    /// Return the raw id value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A participant in a game: identity plus the color they command.
///
/// Two players are equal when their ids match, regardless of name.
#[derive(Debug, Clone, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
}

impl Player {
    /// Create a player with the given id, name, and color.
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color) -> Player {
        Player {
            id,
            name: name.into(),
            color,
        }
    }

    /// Return the player's id.
    #[inline]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Return the player's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the color this player commands.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Player) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, PlayerId};
    use crate::color::Color;

    #[test]
    fn accessors() {
        let player = Player::new(PlayerId::new(7), "Magnus", Color::White);
        assert_eq!(player.id().raw(), 7);
        assert_eq!(player.name(), "Magnus");
        assert_eq!(player.color(), Color::White);
    }

    #[test]
    fn equality_by_id_only() {
        let a = Player::new(PlayerId::new(1), "A", Color::White);
        let b = Player::new(PlayerId::new(1), "B", Color::Black);
        let c = Player::new(PlayerId::new(2), "A", Color::White);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_includes_color() {
        let player = Player::new(PlayerId::new(3), "Hikaru", Color::Black);
        assert_eq!(format!("{player}"), "Hikaru (Black)");
    }
}
