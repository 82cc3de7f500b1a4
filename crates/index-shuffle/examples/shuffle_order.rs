//! Example printing the shuffled traversal order of `0..=max_index`.
//!
//! This example shows how to:
//! - Build an `IndexShuffle` from command line parameters
//! - Enumerate a shuffled order by shuffling each index in turn
//! - Check the bijection property in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_order -- --max-index 9 --seed 42
//! ```
//!
//! Print the inverse mapping (the index found at each position) instead:
//!
//! ```sh
//! cargo run --example shuffle_order -- --max-index 9 --seed 42 --inverse
//! ```
//!
//! Verify that every position in a large domain is hit exactly once, without
//! printing the order:
//!
//! ```sh
//! RUST_LOG=index_shuffle=trace cargo run --release --example shuffle_order -- --max-index 1000000 --verify
//! ```

use std::process;

use clap::Parser;
use index_shuffle::{IndexShuffle, Rounds};
use rayon::prelude::*;

/// Largest domain the `--verify` bitmap is allowed to cover.
const MAX_VERIFY_INDEX: u64 = 1 << 32;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Inclusive upper bound of the shuffled range.
    #[arg(long, value_name = "INDEX", default_value_t = 9)]
    max_index: u64,

    /// Permutation key.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    seed: u32,

    /// Feistel round count (even, at least 4).
    #[arg(long, value_name = "COUNT", default_value_t = Rounds::DEFAULT.get())]
    rounds: u32,

    /// Print the index found at each position instead of the position of each index.
    #[arg(long)]
    inverse: bool,

    /// Check that the mapping is a permutation instead of printing it.
    #[arg(long)]
    verify: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let rounds = match Rounds::new(args.rounds) {
        Ok(rounds) => rounds,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let shuffle = IndexShuffle::new(args.max_index, args.seed, rounds);

    if args.verify {
        if args.max_index >= MAX_VERIFY_INDEX {
            eprintln!("--verify supports --max-index below {MAX_VERIFY_INDEX}.");
            process::exit(2);
        }
        match verify(&shuffle) {
            Ok(()) => println!(
                "OK: {} indices form a permutation (seed {}, {} rounds)",
                args.max_index + 1,
                args.seed,
                rounds
            ),
            Err(message) => {
                eprintln!("FAILED: {message}");
                process::exit(1);
            }
        }
        return;
    }

    for i in 0..=args.max_index {
        let mapped = if args.inverse {
            shuffle.unshuffle(i)
        } else {
            shuffle.shuffle(i)
        };
        println!("{i}\t{mapped}");
    }
}

fn verify(shuffle: &IndexShuffle) -> Result<(), String> {
    let max_index = shuffle.max_index();
    let positions = (0..=max_index)
        .into_par_iter()
        .map(|index| shuffle.try_shuffle(index).map_err(|err| err.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let len = usize::try_from(max_index + 1).map_err(|err| err.to_string())?;
    let mut seen = vec![false; len];
    for (index, position) in positions.into_iter().enumerate() {
        let slot = usize::try_from(position)
            .ok()
            .and_then(|position| seen.get_mut(position))
            .ok_or_else(|| format!("index {index} mapped out of range to {position}"))?;
        if *slot {
            return Err(format!("position {position} reached twice"));
        }
        *slot = true;
    }
    Ok(())
}
