//! Player profiles.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A player profile: identity and display preferences.
///
/// The profile is immutable after construction. Which occupancy code a
/// player writes into cells is not stored here: the engine binds its
/// first player to seat one (code 1) and its second to seat two
/// (code 2), and that binding holds for the engine's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Symbol drawn in taken cells.
    mark: String,
    /// Display color, cosmetic only.
    color: String,
}

impl Player {
    /// Default display color.
    pub const DEFAULT_COLOR: &'static str = "blue";

    /// Creates a player with the default color.
    pub fn new(name: impl Into<String>, mark: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mark: mark.into(),
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let player = Player::new("ada", "X");
        assert_eq!(player.name(), "ada");
        assert_eq!(player.mark(), "X");
        assert_eq!(player.color(), "blue");
    }

    #[test]
    fn test_with_color() {
        let player = Player::new("grace", "O").with_color("red");
        assert_eq!(player.color(), "red");
    }
}
