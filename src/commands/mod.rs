//! Command implementations

pub mod benchmark;
pub mod resolve;
pub mod simple;
pub mod trace;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use resolve::{RoundReport, parse_submission, resolve_round};
pub use simple::run_simple;
pub use trace::{TraceResult, trace_word};
