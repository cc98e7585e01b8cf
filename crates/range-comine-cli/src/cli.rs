//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Range-based spatial co-location pattern mining.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a CSV file of `id,feature,x,y` rows. Mutually exclusive with
    /// the synthetic-generation options below.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Number of distinct features to generate synthetically, if `--csv` is
    /// not given.
    #[arg(long, default_value_t = 4)]
    pub features: usize,

    /// Number of instances per feature to generate synthetically.
    #[arg(long, default_value_t = 8)]
    pub instances: usize,

    /// Width of the synthetic generation area.
    #[arg(long, default_value_t = 100.0)]
    pub width: f64,

    /// Height of the synthetic generation area.
    #[arg(long, default_value_t = 100.0)]
    pub height: f64,

    /// Random seed for synthetic generation.
    #[arg(long, default_value_t = 13)]
    pub seed: u64,

    /// Lower bound of the distance interval.
    #[arg(long)]
    pub d1: f64,

    /// Upper bound of the distance interval.
    #[arg(long)]
    pub d2: f64,

    /// Minimum participation-index threshold for prevalence.
    #[arg(long)]
    pub min_prev: f64,

    /// Which mining algorithm to run.
    #[arg(long, value_enum, default_value_t = Algo::RangeComine)]
    pub algo: Algo,

    /// Write JSON output to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Selects which of the three mining entry points to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    /// The CDMP-pruned lattice driver.
    RangeComine,
    /// The fully naive cross-check oracle.
    Naive,
    /// The incremental cross-check oracle.
    Incremental,
}
