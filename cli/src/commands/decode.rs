//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode, separated by spaces or commas (use "-" for stdin)
    #[arg(short, long)]
    pub ids: String,
}

use amtok_tokenizer::AmharicTokenizer;
use anyhow::{Context, Result as AnyhowResult};
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = AmharicTokenizer::load(Path::new(&cmd.tokenizer))?;

    let raw = super::read_input(cmd.ids)?;

    let ids: Vec<u32> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("invalid token id {:?}", part))
        })
        .collect::<AnyhowResult<_>>()?;

    println!("{}", tokenizer.decode(&ids));

    Ok(())
}
