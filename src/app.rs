//! Core application state and logic for the mansion exploration.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;

use crate::{events::ChoiceReader, explorer::Explorer, map::Room, types::Outcome, ui};

/// Application state container for the mansion exploration.
///
/// This structure owns the mansion map for the whole run. Running the application consumes it, so
/// the map is released exactly once whichever way the exploration ends.
#[derive(Debug)]
pub struct App {
    /// Root of the mansion map.
    ///
    /// This field holds the entrance hall, which owns every other room of the map.
    mansion: Room,
}

impl App {
    /// Creates a new instance of the App structure holding the mansion map.
    ///
    /// A [`Default`] trait implementation is not provided because building the map is fallible.
    ///
    /// # Errors
    ///
    /// This function may return errors if the mansion layout does not describe a valid tree.
    pub fn new() -> Result<Self> {
        Ok(Self {
            mansion: Room::mansion()?,
        })
    }

    /// Runs one exploration of the mansion.
    ///
    /// This function greets the player, walks the map with choices read from `input`, and then
    /// releases the map before returning how the exploration ended. Read failures on `input` end
    /// the exploration gracefully and are not reported as errors.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when writing to `output` fails
    pub fn run<R: BufRead, W: Write>(self, input: R, output: &mut W) -> Result<Outcome> {
        ui::welcome(output)?;
        ui::map_ready(output, self.mansion.len())?;
        ui::exploration_start(output)?;

        let mut choices = ChoiceReader::new(input);
        let mut explorer = Explorer::new(&self.mansion);
        let outcome = explorer.explore(&mut choices, output)?;
        tracing::info!(?outcome, room = explorer.current().name(), "exploration finished");

        let released = self.mansion.release();
        tracing::debug!(rooms = released.len(), "mansion released");
        ui::released(output, released.len())?;

        Ok(outcome)
    }
}
