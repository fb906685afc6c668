use std::{fs::File, io::BufReader};

use clap::Parser;
use eyre::{Result, WrapErr};
use sorted_array::{cli::QueryArgs, Ascending, BuildOptions, Comparator, Descending, SortedArray};

fn query<C: Comparator<i64>>(values: &[i64], comparator: C, args: &QueryArgs) -> Result<String> {
    let options = if args.unchecked {
        BuildOptions::UNCHECKED
    } else {
        BuildOptions::PARSE
    };
    let array = SortedArray::build(values, comparator, options)
        .wrap_err_with(|| format!("{} is not sorted", args.file.display()))?;
    let found = array.search(&args.needle, args.search_options());
    serde_json::to_string(&found).wrap_err("Could not serialize search result")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = QueryArgs::parse();
    let file = File::open(&args.file)
        .wrap_err_with(|| format!("Failed to open file {}", args.file.display()))?;
    let values: Vec<i64> = serde_json::from_reader(BufReader::new(file))
        .wrap_err("Expected a JSON array of integers")?;

    let output = if args.descending {
        query(&values, Descending, &args)?
    } else {
        query(&values, Ascending, &args)?
    };
    println!("{output}");
    Ok(())
}
