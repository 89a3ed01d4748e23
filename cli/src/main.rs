//! Amtok CLI - Command-line interface for the Amharic BPE tokenizer.
//!
//! This is the main entry point for the `amtok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, TokenizeCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "amtok")]
#[command(about = "A subword BPE tokenizer for Amharic text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from an Amharic corpus
    Train(TrainCommand),
    /// Tokenize text into subword tokens
    Tokenize(TokenizeCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
    }

    Ok(())
}
