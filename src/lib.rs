//! hello-sum - prints a greeting and the sum of a sequence of integers
//!
//! The default run writes `Hello Go World!` followed by `Sum: 15`, the total
//! of the fixed sequence `[1, 2, 3, 4, 5]`.

pub mod cli;
pub mod error;
pub mod numbers;
pub mod report;
pub mod runner;
