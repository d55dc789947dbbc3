//! Encode command - cipher a message with a key phrase.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use ciphrase::{encode_with_config, EncoderConfig};

use super::CommandExecutor;

/// Encode a message using a key phrase.
///
/// The message and key phrase are normalized to uppercase letters first;
/// spaces, digits, and punctuation are dropped and cannot be recovered on
/// decode. The encoded text is printed to stdout.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Message to encode (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Key phrase keying the cipher (must contain at least one letter)
    #[arg(short, long)]
    pub key_phrase: String,

    /// Verbose output (shows the normalized message and key phrase)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim().to_string()
            }
        };

        let config = EncoderConfig {
            verbose: self.verbose,
        };

        let encoded = encode_with_config(&message, &self.key_phrase, &config)
            .context("Failed to encode message")?;

        if encoded.message.is_empty() {
            anyhow::bail!("Message contains no letters to encode");
        }

        println!("{}", encoded.translation);

        if self.verbose {
            eprintln!();
            eprintln!("message:     {}", encoded.message);
            eprintln!("key phrase:  {}", encoded.key_phrase);
        }

        Ok(())
    }
}
