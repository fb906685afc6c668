use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::sorted_array::{Direction, SearchOptions};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QueryMode {
    /// Binary narrowing over the sorted array
    Binary,
    /// Direct scan over the same window, for comparison
    Linear,
}

#[derive(Parser, Debug, Serialize)]
/// Times boundary searches against random sorted arrays
pub struct ExperimentArgs {
    #[arg(value_enum)]
    /// Toggle between binary narrowing and linear scan
    pub query_mode: QueryMode,

    /// a file to write the results to
    pub outfile: PathBuf,

    #[arg(long, default_value = "1000")]
    /// The minimum length of the array to build
    pub min_size: u64,

    #[arg(long, default_value = "100000")]
    /// The maximum length of the array to build
    pub max_size: u64,

    #[arg(short, long, default_value = "1000")]
    pub step_size: u64,

    /// the number of searches to execute per iteration
    #[arg(short, long, default_value = "100")]
    pub query_size: u64,

    #[arg(short, long, default_value = "right", value_enum)]
    pub direction: Direction,

    /// Skip elements equal to the needle
    #[arg(long)]
    pub exclusive: bool,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl ExperimentArgs {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .direction(self.direction)
            .inclusive(!self.exclusive)
    }
}

#[derive(Parser, Debug)]
#[command(name = "sorted-array", about = "Boundary search over a sorted JSON array")]
pub struct QueryArgs {
    /// a JSON file holding an array of integers
    pub file: PathBuf,

    /// the value to search for
    #[arg(allow_negative_numbers = true)]
    pub needle: i64,

    /// first index of the window (inclusive)
    #[arg(short, long)]
    pub left: Option<usize>,

    /// end of the window (exclusive)
    #[arg(short, long)]
    pub right: Option<usize>,

    #[arg(short, long, default_value = "right", value_enum)]
    pub direction: Direction,

    /// Skip elements equal to the needle
    #[arg(long)]
    pub exclusive: bool,

    /// The array is sorted from largest to smallest
    #[arg(long)]
    pub descending: bool,

    /// Trust the input order instead of validating it
    #[arg(long)]
    pub unchecked: bool,
}

impl QueryArgs {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            left: self.left,
            right: self.right,
            direction: self.direction,
            inclusive: !self.exclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_query_args_map_to_options() {
        let args = QueryArgs::parse_from([
            "sorted-array",
            "values.json",
            "-3",
            "--right",
            "4",
            "--direction",
            "left",
            "--exclusive",
        ]);
        assert_eq!(args.needle, -3);
        assert_eq!(
            args.search_options(),
            SearchOptions::new().right(4).direction(Direction::Left).inclusive(false)
        );
    }

    #[test]
    fn test_experiment_about_text() {
        let command = ExperimentArgs::command();
        let about = command.get_about().map(ToString::to_string);
        assert_eq!(
            about.as_deref(),
            Some("Times boundary searches against random sorted arrays")
        );
    }

    #[test]
    fn test_experiment_defaults() {
        let args = ExperimentArgs::parse_from(["search_experiment", "binary", "out.json"]);
        assert_eq!(args.query_mode, QueryMode::Binary);
        assert_eq!(args.min_size, 1000);
        assert_eq!(args.search_options(), SearchOptions::new());
    }
}
