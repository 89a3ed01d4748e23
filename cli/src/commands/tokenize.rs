//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to tokenize (use "-" to read from stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use amtok_tokenizer::AmharicTokenizer;
use anyhow::Result as AnyhowResult;
use std::path::Path;

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let tokenizer = AmharicTokenizer::load(Path::new(&cmd.tokenizer))?;

    let input_text = super::read_input(cmd.input)?;

    let tokens = tokenizer.tokenize(&input_text)?;
    let output = tokens.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Wrote {} tokens to {}", tokens.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
