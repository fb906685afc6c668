use eyre::{Result, WrapErr};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng,
};
use serde::Serialize;
use std::{
    fs::File,
    hint::black_box,
    io::{BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};
use tracing::info;

use crate::{
    cli::QueryMode, comparator::Ascending, linear_scan::scan, sorted_array::SearchOptions,
    SortedArray,
};

#[derive(Serialize, Debug, Clone)]
pub struct Iteration {
    pub size: u64,
    pub setup_time: Duration,
    pub query_time: Duration,
    pub hits: u64,
}

#[derive(Serialize, Debug, Clone)]
pub struct Params {
    pub start: u64,
    pub stop: u64,
    pub step_size: u64,
    pub query_size: u64,
}

pub trait Experiment: Serialize {
    type Resource;

    fn setup(&self, rng: &mut StdRng, size: u64) -> Result<Self::Resource>;
    fn get_params(&self) -> &Params;
    /// Run one query, returning how long it took and whether it found anything.
    fn execute_query(&self, resource: &Self::Resource, needle: i64) -> (Duration, bool);

    fn get_iterations(&self, rng: &mut StdRng) -> Result<Vec<Iteration>> {
        let params = self.get_params();
        (params.start..=params.stop)
            .step_by(params.step_size.max(1) as usize)
            .map(|size| {
                let now = Instant::now();
                let resource = self.setup(rng, size)?;
                let setup_time = now.elapsed();
                // needles run a little past both ends so misses are measured too
                let bound = size as i64 + 1;
                let query_dist = Uniform::new_inclusive(-1, bound);
                let mut query_time = Duration::default();
                let mut hits = 0;
                query_dist
                    .sample_iter(&mut *rng)
                    .take(params.query_size as usize)
                    .for_each(|needle| {
                        let (elapsed, found) = self.execute_query(&resource, needle);
                        query_time += elapsed;
                        hits += u64::from(found);
                    });
                info!(size, ?query_time, hits, "finished iteration");
                Ok(Iteration {
                    size,
                    setup_time,
                    query_time,
                    hits,
                })
            })
            .collect()
    }

    fn save<S: AsRef<Path>>(&self, fname: S) -> Result<()> {
        let file = File::create(fname).wrap_err("could not create experiment output file")?;
        let mut writer = BufWriter::new(file);
        write!(
            &mut writer,
            "{}",
            serde_json::to_string(self).wrap_err("Could not serialize experiment")?
        )?;
        Ok(())
    }

    fn push_iteration(&mut self, iteration: Iteration);

    fn run(&mut self, rng: &mut StdRng) -> Result<()> {
        self.get_iterations(rng)?
            .into_iter()
            .for_each(|iteration| self.push_iteration(iteration));
        Ok(())
    }
}

/// A sorted vector of `size` values drawn from `[0, size]`, duplicates included.
pub fn generate_sorted_of_size(size: u64, rng: &mut StdRng) -> Vec<i64> {
    let distribution = Uniform::new_inclusive(0, size as i64);
    let mut values = rng
        .sample_iter(distribution)
        .take(size as usize)
        .collect::<Vec<i64>>();
    values.sort_unstable();
    values
}

/// Times boundary queries against random sorted arrays of growing size.
#[derive(Serialize, Debug)]
pub struct SearchExperiment {
    pub mode: QueryMode,
    pub options: SearchOptions,
    pub params: Params,
    pub runs: Vec<Iteration>,
}

impl SearchExperiment {
    pub fn new(mode: QueryMode, options: SearchOptions, params: Params) -> Self {
        Self {
            mode,
            options,
            params,
            runs: Vec::new(),
        }
    }
}

impl Experiment for SearchExperiment {
    type Resource = SortedArray<i64, Ascending>;

    fn setup(&self, rng: &mut StdRng, size: u64) -> Result<Self::Resource> {
        let values = generate_sorted_of_size(size, rng);
        SortedArray::from_vec(values, Ascending).wrap_err("generated values were not sorted")
    }

    fn get_params(&self) -> &Params {
        &self.params
    }

    fn execute_query(&self, resource: &Self::Resource, needle: i64) -> (Duration, bool) {
        let now = Instant::now();
        let found = match self.mode {
            QueryMode::Binary => black_box(resource.search(&needle, self.options)).is_some(),
            QueryMode::Linear => {
                black_box(scan(resource.as_slice(), &Ascending, &needle, self.options)).is_some()
            }
        };
        (now.elapsed(), found)
    }

    fn push_iteration(&mut self, iteration: Iteration) {
        self.runs.push(iteration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn params() -> Params {
        Params {
            start: 0,
            stop: 200,
            step_size: 50,
            query_size: 20,
        }
    }

    #[test]
    fn test_generated_values_are_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = generate_sorted_of_size(500, &mut rng);
        assert_eq!(values.len(), 500);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_binary_and_linear_agree_on_hits() {
        let options = SearchOptions::new().inclusive(false);
        let mut binary = SearchExperiment::new(QueryMode::Binary, options, params());
        let mut linear = SearchExperiment::new(QueryMode::Linear, options, params());
        binary.run(&mut StdRng::seed_from_u64(7)).unwrap();
        linear.run(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(binary.runs.len(), 5);
        let hits = |runs: &[Iteration]| runs.iter().map(|run| run.hits).collect::<Vec<_>>();
        assert_eq!(hits(&binary.runs), hits(&linear.runs));
    }
}
