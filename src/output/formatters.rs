//! Formatting utilities for terminal output

use crate::core::{Grid, Path};
use crate::round::WordSet;
use colored::Colorize;

/// Render the board as text rows, highlighting a traced path
///
/// Path tiles are shown bold green, with the first tile underlined.
#[must_use]
pub fn board_lines(grid: &Grid, highlight: Option<&Path>) -> Vec<String> {
    grid.rows()
        .enumerate()
        .map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(|(col, tile)| {
                    let pos = row * grid.dim() + col;
                    let cell = format!(" {tile:<2} ");
                    match highlight.and_then(|path| path.step_of(pos)) {
                        Some(0) => cell.bright_green().bold().underline().to_string(),
                        Some(_) => cell.bright_green().bold().to_string(),
                        None => cell.white().to_string(),
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Describe a path as `TILE(row,col) → ...`
#[must_use]
pub fn describe_path(grid: &Grid, path: &Path) -> String {
    path.positions()
        .iter()
        .map(|&pos| {
            format!(
                "{}({},{})",
                grid.tile(pos),
                pos / grid.dim() + 1,
                pos % grid.dim() + 1
            )
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Join a word set for display, or a dash if empty
#[must_use]
pub fn format_word_set(words: &WordSet) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        words.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::parse("qu a t s").unwrap()
    }

    #[test]
    fn board_lines_one_per_row() {
        colored::control::set_override(false);
        let lines = board_lines(&grid(), None);
        assert_eq!(lines, vec![" QU  A  ", " T   S  "]);
    }

    #[test]
    fn describe_path_uses_one_based_coordinates() {
        let path = Path::new(vec![0, 3]);
        assert_eq!(describe_path(&grid(), &path), "QU(1,1) → S(2,2)");
    }

    #[test]
    fn format_empty_word_set() {
        assert_eq!(format_word_set(&WordSet::new()), "-");
    }

    #[test]
    fn format_word_set_sorted() {
        let words: WordSet = ["DOG", "CAT"].iter().map(|w| (*w).to_string()).collect();
        assert_eq!(format_word_set(&words), "CAT, DOG");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
