//! Input acquisition for the exploration loop.

use std::{
    io::{self, BufRead, ErrorKind},
    str,
};

/// Result of asking the player for a choice.
///
/// This enumeration models every way a read can end, so that the exploration loop never has to
/// guess from a sentinel value.
#[derive(Debug)]
pub(crate) enum Input {
    /// The next non-whitespace character typed by the player.
    Choice(char),
    /// The input stream has no more characters.
    EndOfStream,
    /// The input stream failed while reading, or held bytes that are not UTF-8.
    Failure(io::Error),
}

/// Reader of single-character choices.
///
/// This structure pulls the input one UTF-8 scalar at a time, skipping whitespace, and never holds
/// more than the four bytes of the character being decoded. Several choices typed on the same line
/// are therefore consumed by successive prompts, and anything past the last choice stays unread.
pub(crate) struct ChoiceReader<R> {
    /// Source of the player's input.
    reader: R,
}

/// Returns the encoded length of a UTF-8 sequence from its first byte.
///
/// Bytes that cannot start a sequence yield `None`.
const fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> ChoiceReader<R> {
    /// Wraps a buffered reader.
    pub(crate) const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the next choice character.
    ///
    /// This function blocks until a non-whitespace character is available or the stream ends or
    /// fails. A byte that does not decode is reported as a failure when it is reached, so the
    /// choices read before it are kept.
    pub(crate) fn next_choice(&mut self) -> Input {
        loop {
            match self.read_char() {
                Ok(Some(choice)) if choice.is_whitespace() => {}
                Ok(Some(choice)) => return Input::Choice(choice),
                Ok(None) => return Input::EndOfStream,
                Err(err) => return Input::Failure(err),
            }
        }
    }

    /// Decodes one character, returning `None` at the end of the stream.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = sequence_width(lead).ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("byte {lead:#04x} cannot start a character"),
            )
        })?;

        let mut encoded = Vec::with_capacity(width);
        encoded.push(lead);
        while encoded.len() < width {
            let byte = self.read_byte()?.ok_or_else(|| {
                io::Error::new(ErrorKind::UnexpectedEof, "input ended inside a character")
            })?;
            encoded.push(byte);
        }

        let text =
            str::from_utf8(&encoded).map_err(|err| io::Error::new(ErrorKind::InvalidData, err))?;

        Ok(text.chars().next())
    }

    /// Takes one byte off the reader, returning `None` at the end of the stream.
    ///
    /// Interrupted reads are retried.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buffer) => break buffer.first().copied(),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        };

        if byte.is_some() {
            self.reader.consume(1);
        }

        Ok(byte)
    }
}
