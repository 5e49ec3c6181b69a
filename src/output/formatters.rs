//! Formatting utilities for terminal output

use crate::core::Tile;

/// Format a judged guess row as an emoji string
#[must_use]
pub fn tiles_to_emoji(tiles: &[Tile; 5]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Absent => '⬜',
            Tile::Present => '🟨',
            Tile::Correct => '🟩',
        })
        .collect()
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

    #[test]
    fn tiles_to_emoji_all_gray() {
        let emoji = tiles_to_emoji(&[Tile::Absent; 5]);
        assert_eq!(emoji, "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn tiles_to_emoji_all_green() {
        let emoji = tiles_to_emoji(&[Tile::Correct; 5]);
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tiles_to_emoji_mixed() {
        let emoji = tiles_to_emoji(&[
            Tile::Correct,
            Tile::Present,
            Tile::Absent,
            Tile::Present,
            Tile::Correct,
        ]);
        assert_eq!(emoji, "🟩🟨⬜🟨🟩");
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
