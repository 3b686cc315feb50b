//! errstat - statistical comparison of final-error samples in performance logs
//!
//! Reads `final error: <number>` samples from one or two log files, summarizes
//! each as a population (mean, sample standard deviation, one-sigma bound) and,
//! for two logs, runs a two-sample z-test with an approximate p-value.

pub mod cli;
pub mod error;
pub mod json_output;
pub mod parser;
pub mod population;
pub mod report;
pub mod statistics;
