//! Ciphrase - phrase-keyed Vigenère cipher
//!
//! A CLI tool that encodes and decodes short text messages with a
//! polyalphabetic substitution cipher keyed by a user-supplied phrase.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InteractiveCommand};

/// Ciphrase - phrase-keyed Vigenère cipher
///
/// Messages and key phrases are normalized to the 26 uppercase letters before
/// ciphering. Decoding with the same key phrase restores the normalized
/// message exactly; spacing and punctuation are not preserved.
#[derive(Parser)]
#[command(name = "ciphrase")]
#[command(version)]
#[command(about = "Encode and decode messages with a phrase-keyed Vigenère cipher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message with a key phrase
    Encode(EncodeCommand),

    /// Decode an encoded message with the key phrase it was encoded with
    Decode(DecodeCommand),

    /// Run an interactive encode/decode session on the terminal
    Interactive(InteractiveCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Interactive(cmd) => cmd.execute(),
    }
}
