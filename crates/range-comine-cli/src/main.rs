//! CLI entry point for the range-comine spatial co-location pattern miner.

mod cli;
mod loader;
mod logging;
mod output;

use clap::Parser;

use cli::{Algo, Args};
use range_comine::ObjectSet;

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = logging::configure_logger("range-comine.log")?;
    ftlog::info!("logging to {}", log_path.display());

    let objects = load_objects(&args)?;
    ftlog::info!("loaded {} objects over {} features", objects.len(), objects.feature_order().len());

    let result = match args.algo {
        Algo::RangeComine => range_comine::range_comine(&objects, args.d1, args.d2, args.min_prev),
        Algo::Naive => range_comine::naive_range(&objects, args.d1, args.d2, args.min_prev),
        Algo::Incremental => range_comine::range_inc_mining(&objects, args.d1, args.d2, args.min_prev),
    }
    .map_err(|e| e.to_string())?;

    ftlog::info!("found {} critical distances", result.len());
    output::write_result(&result, args.output.as_deref())
}

fn load_objects(args: &Args) -> Result<ObjectSet, String> {
    match &args.csv {
        Some(path) => loader::load_csv(path),
        None => Ok(ObjectSet::new(range_comine_synth::generate(
            args.features,
            args.instances,
            args.width,
            args.height,
            args.seed,
        ))),
    }
}
