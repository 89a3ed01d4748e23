//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus file
    #[arg(short, long)]
    pub input: String,

    /// Output path for the trained model artifact
    #[arg(short, long)]
    pub output: String,

    /// Maximum number of merges to learn
    #[arg(short, long, default_value_t = 50_000)]
    pub num_merges: usize,

    /// Ceiling on distinct tokens (0 disables the ceiling)
    #[arg(short, long, default_value_t = 10_000)]
    pub vocab_size: usize,

    /// Minimum frequency for merges
    #[arg(short, long, default_value_t = 2)]
    pub min_frequency: u64,

    /// Keep non-Ethiopic characters instead of stripping them
    #[arg(long, default_value_t = false)]
    pub lenient: bool,

    /// Log a progress line every N merges (0 disables)
    #[arg(long, default_value_t = 1_000)]
    pub log_every: usize,
}

use amtok_tokenizer::{AmharicTokenizer, Strictness};
use anyhow::Result as AnyhowResult;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training tokenizer...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Num merges: {}", cmd.num_merges);
    println!("  Vocab size: {}", cmd.vocab_size);
    println!("  Min frequency: {}", cmd.min_frequency);
    println!("  Lenient: {}", cmd.lenient);
    println!();

    // Read training corpus
    let start = Instant::now();
    let corpus = fs::read_to_string(&cmd.input)?;
    println!(
        "Read {} bytes in {:.2}s",
        corpus.len(),
        start.elapsed().as_secs_f64()
    );
    println!();

    let strictness = if cmd.lenient {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };
    let max_vocab_size = (cmd.vocab_size > 0).then_some(cmd.vocab_size);

    let mut tokenizer = AmharicTokenizer::builder()
        .num_merges(cmd.num_merges)
        .max_vocab_size(max_vocab_size)
        .min_pair_frequency(cmd.min_frequency)
        .strictness(strictness)
        .log_every(cmd.log_every)
        .build();

    // Train
    let start = Instant::now();
    let learned = tokenizer.train(&corpus)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Learned merges: {}", learned);
    println!("Final vocab size: {}", tokenizer.vocab_size());
    println!();

    // Save model
    let output_path = Path::new(&cmd.output);
    let start = Instant::now();
    tokenizer.save(output_path)?;
    println!(
        "Model saved to {} in {:.2}s",
        cmd.output,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
