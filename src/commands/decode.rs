//! Decode command - decipher a message with the key phrase it was encoded
//! with.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use ciphrase::{decode_with_config, DecoderConfig};

use super::CommandExecutor;

/// Decode an encoded message using its key phrase.
///
/// The encoded text and key phrase are normalized to uppercase letters
/// first. With the same key phrase used for encoding, the original
/// normalized message is printed to stdout.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Encoded text to decode (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Key phrase the message was encoded with
    #[arg(short, long)]
    pub key_phrase: String,

    /// Verbose output (shows the normalized input and key phrase)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading encoded text from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read encoded text from stdin")?;
                buffer.trim().to_string()
            }
        };

        let config = DecoderConfig {
            verbose: self.verbose,
        };

        let decoded = decode_with_config(&message, &self.key_phrase, &config)
            .context("Failed to decode message")?;

        if decoded.message.is_empty() {
            anyhow::bail!("Input contains no letters to decode");
        }

        println!("{}", decoded.translation);

        if self.verbose {
            eprintln!();
            eprintln!("message:     {}", decoded.message);
            eprintln!("key phrase:  {}", decoded.key_phrase);
        }

        Ok(())
    }
}
