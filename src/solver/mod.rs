//! Board path search
//!
//! Given a grid and a word, find a simple path of adjacent tiles that spells it.

mod finder;

pub use finder::{find_path, is_on_board, trace_words};
