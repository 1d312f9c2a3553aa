//! Word scoring
//!
//! Points grow in steps with word length: short words are worth a point, long
//! words are worth far more.

/// Points for a scored word of `len` letters
///
/// | Length | Points |
/// |--------|--------|
/// | < 3    | 0      |
/// | 3-4    | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | ≥ 8    | 11     |
#[must_use]
pub const fn points_for_length(len: usize) -> u32 {
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Points for a single word, counted by letters
#[must_use]
pub fn word_points(word: &str) -> u32 {
    points_for_length(word.chars().count())
}

/// Total points for a set of scored words
#[must_use]
pub fn total_points<'a, I>(words: I) -> u32
where
    I: IntoIterator<Item = &'a String>,
{
    words.into_iter().map(|word| word_points(word)).sum()
}
