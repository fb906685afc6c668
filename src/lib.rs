pub mod binary_search;
pub mod cli;
pub mod comparator;
pub mod error;
pub mod experiment;
pub mod linear_scan;
pub mod math;
pub mod sorted_array;

pub use comparator::{Ascending, Comparator, Descending};
pub use error::{Result, UnsortedArrayError};
pub use sorted_array::{BuildOptions, Direction, Found, SearchOptions, SortedArray};
