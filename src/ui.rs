//! Console text of the exploration.
//!
//! This module contains every message written to the player. The functions only format text onto a
//! writer, which keeps the exploration logic free of wording and lets tests capture the transcript.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::{
    map::Room,
    types::{Direction, LEFT_KEY, QUIT_KEY, RIGHT_KEY},
};

/// Message shown when a choice does not map onto any command.
pub(crate) const INVALID_OPTION: &str = "Invalid option.";

/// Message shown when the exploration reaches a room without paths.
pub(crate) const DEAD_END: &str = "This room has no more paths. End of exploration!";

/// Message shown when the player stops exploring.
pub(crate) const QUIT: &str = "Exploration ended by the player. See you next time!";

/// Message shown when no choice can be read.
pub(crate) const READ_FAILURE: &str = "Could not read your choice. Leaving...";

/// Opening question of every prompt.
pub(crate) const PROMPT: &str = "Where do you want to go?";

/// Writes the greeting shown when the program starts.
pub(crate) fn welcome<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to Detective Quest - Mansion Map!")?;

    Ok(())
}

/// Writes the confirmation that the map was built.
pub(crate) fn map_ready<W: Write>(out: &mut W, rooms: usize) -> Result<()> {
    writeln!(out, "Mansion map built with {rooms} rooms.")?;

    Ok(())
}

/// Writes the header opening the exploration.
pub(crate) fn exploration_start<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- EXPLORATION START ---")?;

    Ok(())
}

/// Writes the name of the room the player stands in.
pub(crate) fn location<W: Write>(out: &mut W, room: &Room) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "You are in: {}", room.name())?;

    Ok(())
}

/// Writes the end-of-exploration notice for a room without paths.
pub(crate) fn dead_end<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{DEAD_END}")?;

    Ok(())
}

/// Writes the list of choices available from `room` and flushes it.
///
/// Only the directions leading somewhere are offered, while quitting is always offered. The prompt
/// is left on the same line as the player's answer.
pub(crate) fn prompt<W: Write>(out: &mut W, room: &Room) -> Result<()> {
    let mut options: Vec<String> = [Direction::Left, Direction::Right]
        .into_iter()
        .filter(|&direction| room.child(direction).is_some())
        .map(|direction| {
            format!(
                "[{}] {}",
                direction.key().to_ascii_uppercase(),
                direction.repr()
            )
        })
        .collect();
    options.push(format!("[{}] quit", QUIT_KEY.to_ascii_uppercase()));

    write!(out, "{PROMPT} {}: ", options.join(" or "))?;
    out.flush()?;

    Ok(())
}

/// Writes the notice for a direction without a room behind it.
pub(crate) fn no_path<W: Write>(out: &mut W, direction: Direction) -> Result<()> {
    writeln!(
        out,
        "There is no path to the {} here! Choose again.",
        direction.repr()
    )?;

    Ok(())
}

/// Writes the notice for a choice that is not a command, listing the valid keys.
pub(crate) fn invalid_option<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{INVALID_OPTION} Type '{LEFT_KEY}' for {}, '{RIGHT_KEY}' for {}, or '{QUIT_KEY}' to quit.",
        Direction::Left.repr(),
        Direction::Right.repr()
    )?;

    Ok(())
}

/// Writes the farewell shown when the player quits.
pub(crate) fn quit<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{QUIT}")?;

    Ok(())
}

/// Writes the notice for an input stream that could not be read.
pub(crate) fn read_failure<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{READ_FAILURE}")?;

    Ok(())
}

/// Writes the confirmation that the map was released.
pub(crate) fn released<W: Write>(out: &mut W, rooms: usize) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Mansion map released ({rooms} rooms). Program finished.")?;

    Ok(())
}
