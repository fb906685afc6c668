use clap::Parser;
use eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use sorted_array::{
    cli::ExperimentArgs,
    experiment::{Experiment, Params, SearchExperiment},
};

pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = ExperimentArgs::parse();
    let params = Params {
        query_size: args.query_size,
        start: args.min_size,
        stop: args.max_size,
        step_size: args.step_size,
    };
    let mut experiment = SearchExperiment::new(args.query_mode, args.search_options(), params);
    let mut rng = StdRng::seed_from_u64(args.seed);
    experiment.run(&mut rng)?;
    experiment.save(&args.outfile)?;
    Ok(())
}
