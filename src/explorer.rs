//! Traversal of the mansion map.
//!
//! This module contains the state machine walking a cursor from the root of the map towards a
//! leaf, one player choice at a time.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;

use crate::{
    events::{ChoiceReader, Input},
    map::Room,
    types::{Command, Direction, Outcome},
    ui,
};

/// Cursor over a borrowed mansion map.
///
/// This structure holds the room the player currently stands in. It never changes the map and keeps
/// no history, so once the cursor moves into a child the parent cannot be reached again.
#[derive(Debug)]
pub(crate) struct Explorer<'map> {
    /// Room the player stands in.
    current: &'map Room,
}

impl<'map> Explorer<'map> {
    /// Places a new cursor on the root of the map.
    pub(crate) const fn new(root: &'map Room) -> Self {
        Self { current: root }
    }

    /// Returns the room the player stands in.
    pub(crate) const fn current(&self) -> &'map Room {
        self.current
    }

    /// Moves the cursor into the child in `direction`.
    ///
    /// Returns `false` and leaves the cursor where it was when no room lies in that direction.
    pub(crate) fn advance(&mut self, direction: Direction) -> bool {
        match self.current.child(direction) {
            Some(next) => {
                tracing::debug!(from = self.current.name(), to = next.name(), "moved");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Runs the exploration loop until a terminal state is reached.
    ///
    /// Each iteration shows the current room, stops on a leaf, and otherwise prompts for a choice.
    /// Invalid choices are reported and prompted again at the same room. A stream that ends or
    /// fails stops the loop gracefully.
    ///
    /// # Errors
    ///
    /// This function may return errors if writing to `out` fails.
    pub(crate) fn explore<R: BufRead, W: Write>(
        &mut self,
        choices: &mut ChoiceReader<R>,
        out: &mut W,
    ) -> Result<Outcome> {
        loop {
            ui::location(out, self.current)?;

            if self.current.is_leaf() {
                ui::dead_end(out)?;
                return Ok(Outcome::LeafReached);
            }

            ui::prompt(out, self.current)?;

            let choice = match choices.next_choice() {
                Input::Choice(choice) => choice,
                Input::EndOfStream => {
                    tracing::debug!(room = self.current.name(), "input ended");
                    ui::read_failure(out)?;
                    return Ok(Outcome::InputFailure);
                }
                Input::Failure(err) => {
                    tracing::warn!(room = self.current.name(), %err, "failed to read choice");
                    ui::read_failure(out)?;
                    return Ok(Outcome::InputFailure);
                }
            };

            match Command::from_char(choice) {
                Some(Command::Quit) => {
                    ui::quit(out)?;
                    return Ok(Outcome::Quit);
                }
                Some(Command::Go(direction)) => {
                    if !self.advance(direction) {
                        tracing::debug!(room = self.current.name(), ?direction, "no path");
                        ui::no_path(out, direction)?;
                    }
                }
                None => ui::invalid_option(out)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{DEAD_END, INVALID_OPTION, PROMPT, QUIT, READ_FAILURE};
    use proptest::prelude::*;

    /// Builds the mansion used by the tests.
    fn create_test_mansion() -> Room {
        Room::mansion().expect("mansion layout should be valid")
    }

    /// Explores from the cursor's position with `input` as the player's answers.
    ///
    /// Returns the outcome, the transcript, and the reader so tests can inspect unread input.
    fn explore<'input>(
        explorer: &mut Explorer<'_>,
        input: &'input str,
    ) -> (Outcome, String, ChoiceReader<&'input [u8]>) {
        let mut choices = ChoiceReader::new(input.as_bytes());
        let mut out = Vec::new();
        let outcome = explorer
            .explore(&mut choices, &mut out)
            .expect("writing to memory should succeed");
        let transcript = String::from_utf8(out).expect("transcript should be valid UTF-8");

        (outcome, transcript, choices)
    }

    #[test]
    fn test_left_left_reaches_library() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);

        assert!(explorer.advance(Direction::Left), "hall should lead left");
        assert!(explorer.advance(Direction::Left), "living room should lead left");
        assert_eq!(explorer.current().name(), "Library", "left, left should reach the library");
    }

    #[test]
    fn test_left_left_right_reaches_secret_office() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, transcript, _) = explore(&mut explorer, "e\ne\nd\n");

        assert_eq!(outcome, Outcome::LeafReached, "the secret office should end the walk");
        assert_eq!(explorer.current().name(), "Secret Office", "cursor should rest in the office");
        assert!(transcript.contains(DEAD_END), "the dead end should be announced");
    }

    #[test]
    fn test_right_right_reaches_winter_garden() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, _, _) = explore(&mut explorer, "d\nd\n");

        assert_eq!(outcome, Outcome::LeafReached, "the winter garden should end the walk");
        assert_eq!(explorer.current().name(), "Winter Garden", "cursor should rest in the garden");
    }

    #[test]
    fn test_leaf_rooms_end_without_further_input() {
        let cases = [
            ("e e d", "Secret Office"),
            ("e d", "Main Bedroom"),
            ("d e", "Pantry"),
            ("d d", "Winter Garden"),
        ];

        for (path, leaf) in cases {
            let mansion = create_test_mansion();
            let mut explorer = Explorer::new(&mansion);
            let input = format!("{path} x\n");
            let (outcome, transcript, mut choices) = explore(&mut explorer, &input);

            assert_eq!(outcome, Outcome::LeafReached, "{leaf} should end the walk");
            assert_eq!(explorer.current().name(), leaf, "{path:?} should reach {leaf}");
            assert!(
                transcript.trim_end().ends_with(DEAD_END),
                "nothing should be prompted after reaching {leaf}"
            );
            assert!(
                matches!(choices.next_choice(), Input::Choice('x')),
                "input past {leaf} should stay unread"
            );
        }
    }

    #[test]
    fn test_leaf_has_no_paths() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        assert!(explorer.advance(Direction::Left), "hall should lead left");
        assert!(explorer.advance(Direction::Right), "living room should lead right");
        assert_eq!(explorer.current().name(), "Main Bedroom", "cursor should be in the bedroom");

        assert!(!explorer.advance(Direction::Left), "the bedroom should have no left path");
        assert!(!explorer.advance(Direction::Right), "the bedroom should have no right path");
        assert_eq!(
            explorer.current().name(),
            "Main Bedroom",
            "blocked moves should leave the cursor in place"
        );
    }

    #[test]
    fn test_missing_direction_reprompts_same_room() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, transcript, _) = explore(&mut explorer, "e\ne\ne\ns\n");

        assert_eq!(outcome, Outcome::Quit, "the player should quit in the end");
        assert_eq!(explorer.current().name(), "Library", "cursor should stay in the library");
        assert!(
            transcript.contains("There is no path to the left here!"),
            "the blocked move should be reported"
        );
        assert_eq!(
            transcript.matches("You are in: Library").count(),
            2,
            "the library should be shown again after the blocked move"
        );
    }

    #[test]
    fn test_quit_at_root() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, transcript, mut choices) = explore(&mut explorer, "s\ne\n");

        assert_eq!(outcome, Outcome::Quit, "'s' should quit");
        assert_eq!(explorer.current().name(), "Entrance Hall", "cursor should stay at the root");
        assert_eq!(
            transcript.matches(PROMPT).count(),
            1,
            "nothing should be prompted after quitting"
        );
        assert!(transcript.trim_end().ends_with(QUIT), "the farewell should close the transcript");
        assert!(
            matches!(choices.next_choice(), Input::Choice('e')),
            "input after quitting should stay unread"
        );
    }

    #[test]
    fn test_quit_at_interior_room() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, _, _) = explore(&mut explorer, "D\nS\n");

        assert_eq!(outcome, Outcome::Quit, "'S' should quit");
        assert_eq!(explorer.current().name(), "Kitchen", "cursor should stay in the kitchen");
    }

    #[test]
    fn test_uppercase_commands() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, _, _) = explore(&mut explorer, "E\nE\nD\n");

        assert_eq!(outcome, Outcome::LeafReached, "uppercase keys should move too");
        assert_eq!(
            explorer.current().name(),
            "Secret Office",
            "'E', 'E', 'D' should reach the office"
        );
    }

    #[test]
    fn test_end_of_stream_stops_gracefully() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let (outcome, transcript, _) = explore(&mut explorer, "e\n");

        assert_eq!(outcome, Outcome::InputFailure, "running out of input should stop the walk");
        assert_eq!(explorer.current().name(), "Living Room", "cursor should keep its last room");
        assert!(transcript.contains(READ_FAILURE), "the failure should be reported");
    }

    #[test]
    fn test_read_error_stops_gracefully() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let bytes = [b'd', b'\n', 0xff, b'\n'];
        let mut choices = ChoiceReader::new(bytes.as_slice());
        let mut out = Vec::new();

        let outcome = explorer
            .explore(&mut choices, &mut out)
            .expect("writing to memory should succeed");

        assert_eq!(outcome, Outcome::InputFailure, "a read error should stop the walk");
        assert_eq!(explorer.current().name(), "Kitchen", "cursor should keep its last room");
    }

    #[test]
    fn test_quit_before_invalid_byte_on_same_line() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let bytes = [b's', 0xff, b'\n'];
        let mut choices = ChoiceReader::new(bytes.as_slice());
        let mut out = Vec::new();

        let outcome = explorer
            .explore(&mut choices, &mut out)
            .expect("writing to memory should succeed");
        let transcript = String::from_utf8(out).expect("transcript should be valid UTF-8");

        assert_eq!(outcome, Outcome::Quit, "the quit choice should win over the later bad byte");
        assert!(!transcript.contains(READ_FAILURE), "no read failure should be reported");
        assert_eq!(explorer.current().name(), "Entrance Hall", "cursor should stay at the root");
    }

    #[test]
    fn test_move_before_invalid_byte_on_same_line() {
        let mansion = create_test_mansion();
        let mut explorer = Explorer::new(&mansion);
        let bytes = [b'e', b'e', 0xff, b'\n'];
        let mut choices = ChoiceReader::new(bytes.as_slice());
        let mut out = Vec::new();

        let outcome = explorer
            .explore(&mut choices, &mut out)
            .expect("writing to memory should succeed");

        assert_eq!(outcome, Outcome::InputFailure, "the bad byte should end the walk");
        assert_eq!(
            explorer.current().name(),
            "Library",
            "both moves typed before the bad byte should be applied"
        );
    }

    proptest! {
        #[test]
        fn test_unrecognized_choice_keeps_cursor(
            choice in any::<char>()
                .prop_filter("must not be a command or blank", |choice| {
                    !"eEdDsS".contains(*choice) && !choice.is_whitespace()
                })
        ) {
            let mansion = create_test_mansion();
            let mut explorer = Explorer::new(&mansion);
            let input = format!("{choice}\ns\n");
            let (outcome, transcript, _) = explore(&mut explorer, &input);

            prop_assert_eq!(outcome, Outcome::Quit);
            prop_assert_eq!(explorer.current().name(), "Entrance Hall");
            prop_assert_eq!(transcript.matches(INVALID_OPTION).count(), 1);
            prop_assert_eq!(transcript.matches(PROMPT).count(), 2);
        }
    }
}
