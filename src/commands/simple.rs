//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Service calls run on the given
//! tokio runtime and block until they answer.

use crate::config::Services;
use crate::core::WORD_LEN;
use crate::game::{Progress, RevealSource, RoundSequencer};
use crate::output::{print_completion, print_panel};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(runtime: &Runtime, services: &Services) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║            Thridle - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Each round shows one letter in [brackets]. Type the whole word,");
    println!("or just the four hidden letters, and press Enter.\n");
    println!("  🟩 right letter, right place");
    println!("  🟨 letter is in the word somewhere");
    println!("  🟥 letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'reset' to clear the round\n");

    let mut seq = RoundSequencer::new();
    play(runtime, services, &mut seq, &mut io::stdin().lock())
}

/// Game loop over any line source; returns when the player quits or input ends
fn play<R: RevealSource, I: BufRead>(
    runtime: &Runtime,
    services: &Services,
    seq: &mut RoundSequencer<R>,
    input: &mut I,
) -> Result<()> {
    if !start_game(runtime, services, seq, input)? {
        return Ok(());
    }

    loop {
        let Some(round) = seq.active_round() else {
            return Ok(());
        };

        println!();
        for (i, panel) in seq.panels().iter().enumerate() {
            print_panel(i, panel);
        }
        println!();

        let Some(line) = get_user_input(input, &format!("Round {} guess", round + 1))? else {
            return Ok(());
        };
        match line.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                if !start_game(runtime, services, seq, input)? {
                    return Ok(());
                }
                continue;
            }
            "reset" => {
                seq.reset_active();
                continue;
            }
            _ => {}
        }

        let revealed = seq.panels()[round].revealed();
        let Some(letters) = letters_for_slots(revealed, &line) else {
            println!("❌ Enter {WORD_LEN} letters, or the {} hidden ones", WORD_LEN - 1);
            continue;
        };
        for (slot, letter) in letters {
            seq.set_letter(round, slot, &letter.to_string());
        }

        match runtime.block_on(seq.submit_with(round, services.dictionary.as_ref())) {
            Ok(Progress::NotAWord { .. } | Progress::Stale) => {}
            Ok(Progress::Retry { feedback, .. }) => {
                println!("  {}", feedback.to_emoji());
            }
            Ok(Progress::Advanced { next, .. }) => {
                println!("\n✨ {} On to round {}.", "Solved!".green().bold(), next + 1);
            }
            Ok(Progress::GameComplete) => {
                for (i, panel) in seq.panels().iter().enumerate() {
                    print_panel(i, panel);
                }
                print_completion();

                if !confirm(input, "Play again? (yes/no)")? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                if !start_game(runtime, services, seq, input)? {
                    return Ok(());
                }
            }
            Err(err) => println!("❌ {err}"),
        }
    }
}

/// Keep requesting words until a game is ready or the player gives up
fn start_game<R: RevealSource, I: BufRead>(
    runtime: &Runtime,
    services: &Services,
    seq: &mut RoundSequencer<R>,
    input: &mut I,
) -> Result<bool> {
    loop {
        println!("Fetching words...");
        match runtime.block_on(seq.new_game(services.words.as_ref())) {
            Ok(()) => return Ok(true),
            Err(err) => {
                println!("❌ {err}");
                if !confirm(input, "Try again? (yes/no)")? {
                    return Ok(false);
                }
            }
        }
    }
}

/// Ask a yes/no question; end of input counts as no
fn confirm<I: BufRead>(input: &mut I, prompt: &str) -> Result<bool> {
    let answer = get_user_input(input, prompt)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Map typed input onto the editable slots
///
/// A full-length word fills every slot but the revealed one (its letter there
/// is ignored). Four letters fill the hidden slots in order.
fn letters_for_slots(revealed: usize, input: &str) -> Option<Vec<(usize, char)>> {
    let chars: Vec<char> = input.chars().collect();
    let open = (0..WORD_LEN).filter(|slot| *slot != revealed);

    match chars.len() {
        WORD_LEN => Some(open.map(|slot| (slot, chars[slot])).collect()),
        n if n == WORD_LEN - 1 => Some(open.zip(chars).collect()),
        _ => None,
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedReveal;
    use crate::services::{Dictionary, ServiceError, WordSource};
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::sync::Arc;

    struct Canned(&'static str);

    #[async_trait]
    impl WordSource for Canned {
        async fn fetch_triple(&self) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    #[async_trait]
    impl WordSource for Broken {
        async fn fetch_triple(&self) -> Result<String, ServiceError> {
            Err(ServiceError::Status(503))
        }
    }

    struct AnyWord;

    #[async_trait]
    impl Dictionary for AnyWord {
        async fn is_word(&self, _candidate: &str) -> Result<bool, ServiceError> {
            Ok(true)
        }
    }

    fn services(words: Arc<dyn WordSource>) -> Services {
        Services {
            dictionary: Arc::new(AnyWord),
            words,
        }
    }

    fn run_lines(words: Arc<dyn WordSource>, lines: &str) -> RoundSequencer<FixedReveal> {
        let runtime = Runtime::new().unwrap();
        let mut seq = RoundSequencer::with_reveal(FixedReveal(0));
        let mut input = Cursor::new(lines.as_bytes().to_vec());

        play(&runtime, &services(words), &mut seq, &mut input).unwrap();
        seq
    }

    #[test]
    fn closed_input_ends_the_game() {
        let seq = run_lines(Arc::new(Canned("brain,ghost,mucky")), "");
        assert_eq!(seq.active_round(), Some(0));
    }

    #[test]
    fn input_ending_mid_round_ends_the_game() {
        let seq = run_lines(Arc::new(Canned("brain,ghost,mucky")), "ra\nrain\n");
        assert_eq!(seq.active_round(), Some(1));
    }

    #[test]
    fn closed_input_stops_fetch_retries() {
        let seq = run_lines(Arc::new(Broken), "");
        assert!(seq.panels().is_empty());
        assert!(seq.last_error().is_some());
    }

    #[test]
    fn plays_a_whole_game_from_lines() {
        let seq = run_lines(
            Arc::new(Canned("brain,ghost,mucky")),
            "rain\nhost\nucky\nno\n",
        );
        assert!(seq.is_complete());
    }

    #[test]
    fn get_user_input_trims_and_reports_end() {
        let mut input = Cursor::new(b"  quit \n".to_vec());
        assert_eq!(get_user_input(&mut input, "prompt").unwrap().as_deref(), Some("quit"));
        assert_eq!(get_user_input(&mut input, "prompt").unwrap(), None);
    }

    #[test]
    fn full_word_skips_revealed_slot() {
        let letters = letters_for_slots(2, "brain").unwrap();
        assert_eq!(letters, [(0, 'b'), (1, 'r'), (3, 'i'), (4, 'n')]);
    }

    #[test]
    fn hidden_letters_fill_in_order() {
        let letters = letters_for_slots(0, "host").unwrap();
        assert_eq!(letters, [(1, 'h'), (2, 'o'), (3, 's'), (4, 't')]);
    }

    #[test]
    fn other_lengths_are_rejected() {
        assert!(letters_for_slots(0, "").is_none());
        assert!(letters_for_slots(0, "ho").is_none());
        assert!(letters_for_slots(0, "ghosts").is_none());
    }
}
