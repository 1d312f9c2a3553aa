//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_round_report, print_round_results, print_scores,
    print_trace_result,
};
