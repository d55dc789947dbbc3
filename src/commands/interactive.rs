//! Interactive command - prompt-driven encode/decode session.
//!
//! Reproduces the classic terminal workflow: prompt for a message, a key
//! phrase, and a direction, print the translation, repeat until the user
//! submits an empty message. Invalid key phrases and directions re-prompt
//! instead of aborting the session.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Args;

use ciphrase::{decode, encode, normalize};

use super::CommandExecutor;

/// Run an interactive encode/decode session on the terminal.
///
/// Repeatedly prompts for a message, a key phrase, and a direction, then
/// prints the normalized message, the normalized key phrase, and the
/// translation. An empty message ends the session.
#[derive(Args, Debug)]
pub struct InteractiveCommand {}

/// Which way the cipher runs for one round of the session.
enum Direction {
    Encode,
    Decode,
}

impl CommandExecutor for InteractiveCommand {
    fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        run_session(&mut lines)
    }
}

/// Drives the prompt loop until the user quits or stdin closes.
fn run_session(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    loop {
        println!("Enter a message (to quit press RETURN only):");
        let message = match read_line(lines)? {
            Some(line) if line.is_empty() => {
                println!("Bye!");
                return Ok(());
            }
            Some(line) => line,
            // EOF ends the session as cleanly as an empty message
            None => return Ok(()),
        };

        let Some(key_phrase) = prompt_key_phrase(lines)? else {
            return Ok(());
        };
        let Some(direction) = prompt_direction(lines)? else {
            return Ok(());
        };

        let (normalized, key, translation) = match direction {
            Direction::Encode => {
                let encoded = encode(&message, &key_phrase)?;
                (encoded.message, encoded.key_phrase, encoded.translation)
            }
            Direction::Decode => {
                let decoded = decode(&message, &key_phrase)?;
                (decoded.message, decoded.key_phrase, decoded.translation)
            }
        };

        println!("message:     {}", normalized);
        println!("key phrase:  {}", key);
        println!("translation: {}", translation);
    }
}

/// Prompts until the user enters a key phrase with at least one letter.
///
/// Returns `None` on EOF. Phrases that are non-blank but normalize to
/// nothing (digits, punctuation) re-prompt like blank ones, so the cipher
/// never sees an empty key.
fn prompt_key_phrase(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>> {
    loop {
        println!("Enter a keyphrase:");
        let Some(line) = read_line(lines)? else {
            return Ok(None);
        };
        if !normalize(&line).is_empty() {
            return Ok(Some(line));
        }
        println!("Please enter a non-blank key phrase.");
    }
}

/// Prompts until the user picks encode or decode. Returns `None` on EOF.
fn prompt_direction(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<Direction>> {
    loop {
        println!("Do you wish to encode (E) or decode (D)?");
        let Some(line) = read_line(lines)? else {
            return Ok(None);
        };
        match line.trim().to_uppercase().as_str() {
            "E" => return Ok(Some(Direction::Encode)),
            "D" => return Ok(Some(Direction::Decode)),
            _ => println!("You must enter E or D"),
        }
    }
}

/// Reads the next line, mapping EOF to `None`.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read from stdin")?)),
        None => Ok(None),
    }
}
