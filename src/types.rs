//! Type definitions for the commands and results of an exploration.

/// Branch of a room the player can walk into.
///
/// This enumeration holds the two possible children of a room in the mansion map. It is used both
/// to read the matching child of the current room and to word the messages shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Left child of a room.
    ///
    /// This variant is selected with the `e` key, from the historical label "esquerda".
    Left,
    /// Right child of a room.
    ///
    /// This variant is selected with the `d` key, from the historical label "direita".
    Right,
}

impl Direction {
    /// Returns the lowercase key that selects the direction.
    pub(crate) const fn key(self) -> char {
        match self {
            Self::Left => LEFT_KEY,
            Self::Right => RIGHT_KEY,
        }
    }

    /// Returns the word used for the direction in messages to the player.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Key selecting the left branch.
pub(crate) const LEFT_KEY: char = 'e';

/// Key selecting the right branch.
pub(crate) const RIGHT_KEY: char = 'd';

/// Key ending the exploration.
pub(crate) const QUIT_KEY: char = 's';

/// Player command decoded from a single input character.
///
/// This enumeration holds every command the exploration loop understands. Characters that do not
/// map onto a command are not represented here; the decoder reports them as absent instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Walk into one of the children of the current room.
    Go(Direction),
    /// Stop exploring where the player stands.
    Quit,
}

impl Command {
    /// Decodes a choice character into a command.
    ///
    /// The comparison ignores ASCII case, so `E` and `e` select the same command. Any character
    /// other than the three command keys yields `None`.
    pub(crate) const fn from_char(choice: char) -> Option<Self> {
        match choice.to_ascii_lowercase() {
            LEFT_KEY => Some(Self::Go(Direction::Left)),
            RIGHT_KEY => Some(Self::Go(Direction::Right)),
            QUIT_KEY => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Terminal state reached by an exploration.
///
/// This enumeration holds the three ways the exploration loop can end. All of them are normal
/// completions of the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player walked into a room without any further paths.
    LeafReached,
    /// The player chose to stop exploring.
    Quit,
    /// The input stream ended or failed before the exploration finished.
    InputFailure,
}
