//! Display functions for line-mode output

use super::formatters::{feedback_to_emoji, panel_letters, panel_tiles};
use crate::commands::CheckResult;
use crate::game::{NOT_A_WORD_NOTICE, Panel, PanelState};
use colored::Colorize;
use colored::control::SHOULD_COLORIZE;

/// Print one round's panel with a status line
pub fn print_panel(round: usize, panel: &Panel) {
    let label = format!("Round {}", round + 1);
    let status = match panel.state() {
        PanelState::Solved => "solved".green().bold(),
        PanelState::Validating => "checking...".cyan(),
        PanelState::Retryable | PanelState::AwaitingGuess => "".normal(),
    };

    // Without colors the tiles cannot show the revealed slot
    let letters = if SHOULD_COLORIZE.should_colorize() {
        panel_tiles(panel)
    } else {
        format!("{}  {}", panel_letters(panel), panel.feedback().to_emoji())
    };

    println!("  {}  {}  {}", label.bright_cyan().bold(), letters, status);
    if panel.validity() == Some(false) {
        println!("  {}", NOT_A_WORD_NOTICE.red());
    }
}

/// Print the completion banner
pub fn print_completion() {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("{}", "           🎉  Congratulations!  🎉".bright_green().bold());
    println!("{}", "              You won the game!".bright_white());
    println!("{}\n", "═".repeat(50).bright_cyan());
}

/// Print the result of the `check` command
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} {} (revealed slot {})",
        "Target:".bright_cyan().bold(),
        result.target.bright_yellow().bold(),
        result.revealed + 1
    );
    println!("{} {}", "Guess: ".bright_cyan().bold(), result.candidate);
    println!("        {}", feedback_to_emoji(&result.feedback));

    if result.solved {
        println!("{}", "✅ All letters correct".green().bold());
    } else {
        println!("{}", "❌ Not solved yet".red());
    }
}
