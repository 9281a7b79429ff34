//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, Verdict};
use crate::game::Panel;
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji string
#[must_use]
pub fn feedback_to_emoji(row: &FeedbackRow) -> String {
    row.to_emoji()
}

/// Letters of a panel as plain text, `_` for empty slots
///
/// The revealed slot is wrapped in brackets: `b r [a] _ _`
#[must_use]
pub fn panel_letters(panel: &Panel) -> String {
    panel
        .buffer()
        .iter()
        .enumerate()
        .map(|(slot, letter)| {
            let ch = letter.unwrap_or('_');
            if slot == panel.revealed() {
                format!("[{ch}]")
            } else {
                ch.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One letter tile colored by its verdict
#[must_use]
pub fn tile(letter: Option<char>, verdict: Verdict, revealed: bool) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));

    if revealed {
        return text.white().on_green().bold();
    }
    match verdict {
        Verdict::Green => text.black().on_green(),
        Verdict::Yellow => text.black().on_yellow(),
        Verdict::Red => text.white().on_red(),
        Verdict::Neutral => text.normal(),
    }
}

/// A panel rendered as colored tiles
#[must_use]
pub fn panel_tiles(panel: &Panel) -> String {
    panel
        .buffer()
        .iter()
        .enumerate()
        .map(|(slot, letter)| {
            tile(letter, panel.feedback().at(slot), slot == panel.revealed()).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
