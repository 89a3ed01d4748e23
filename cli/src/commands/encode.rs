//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to encode (use "-" to read from stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use amtok_tokenizer::AmharicTokenizer;
use anyhow::Result as AnyhowResult;
use std::path::Path;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = AmharicTokenizer::load(Path::new(&cmd.tokenizer))?;

    let input_text = super::read_input(cmd.input)?;

    let ids = tokenizer.encode(&input_text)?;

    let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let output = ids_str.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
