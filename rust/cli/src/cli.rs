use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hilo", version, about = "Guess-my-number game and session toolkit")]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session at the terminal
    Play {
        /// Lower bound of the secret range
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound of the secret range
        #[arg(long)]
        max: Option<i64>,
        /// Starting score for each session
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        score: Option<u32>,
        /// Seed for the secret-number generator
        #[arg(long)]
        seed: Option<u64>,
        /// Path of the best-score store file
        #[arg(long)]
        store: Option<String>,
        /// Record finished sessions to this JSONL file
        #[arg(long)]
        record: Option<String>,
    },
    /// Run unattended sessions with a guessing strategy
    Sim {
        /// Number of sessions to run
        #[arg(long)]
        sessions: u64,
        /// Write session records to this JSONL file
        #[arg(long)]
        output: Option<String>,
        /// Seed for secrets and the random strategy
        #[arg(long)]
        seed: Option<u64>,
        /// Lower bound of the secret range
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound of the secret range
        #[arg(long)]
        max: Option<i64>,
        /// Starting score for each session
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        score: Option<u32>,
        /// Guessing strategy
        #[arg(long, value_enum, default_value = "binary")]
        strategy: Strategy,
    },
    /// Summarize and validate recorded session logs
    Stats {
        /// JSONL file or directory of JSONL files
        #[arg(long)]
        input: String,
    },
    /// Re-run recorded sessions through the engine and check for divergence
    Replay {
        /// JSONL file with session records
        #[arg(long)]
        input: String,
        /// Playback speed multiplier (non-interactive)
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Show or reset the persisted best score
    Best {
        /// Path of the best-score store file
        #[arg(long)]
        store: Option<String>,
        /// Remove the stored best score
        #[arg(long)]
        reset: bool,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
    /// Sample the secret-number generator and report its spread
    Rng {
        /// Seed for the generator
        #[arg(long)]
        seed: Option<u64>,
        /// Number of draws to sample
        #[arg(long, default_value_t = 10_000)]
        samples: u64,
        /// Lower bound of the sampled range
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound of the sampled range
        #[arg(long)]
        max: Option<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Bisect the remaining interval on every guess
    Binary,
    /// Guess uniformly at random over the full range
    Random,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Binary => "binary",
            Strategy::Random => "random",
        }
    }
}
