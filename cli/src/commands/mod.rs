//! CLI commands for the amtok tokenizer.

pub mod decode;
pub mod encode;
pub mod tokenize;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use tokenize::TokenizeCommand;
pub use train::TrainCommand;

use anyhow::Result;

/// Read command input, treating "-" as stdin.
pub(crate) fn read_input(input: String) -> Result<String> {
    if input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input)
    }
}
