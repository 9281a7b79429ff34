//! Thridle
//!
//! A three-round word puzzle. Each round hides a five-letter word with one
//! letter given away; solving a round unlocks the next.
//!
//! # Quick Start
//!
//! ```rust
//! use thridle::core::{PuzzleWord, evaluate};
//!
//! let target = PuzzleWord::new("ghost").unwrap();
//! let row = evaluate(&target, 0, &['g', 'h', 'o', 't', 's']);
//! assert_eq!(row.to_emoji(), "🟩🟩🟩🟨🟨");
//! ```

// Core domain types
pub mod core;

// Panels and round progression
pub mod game;

// Dictionary and word generator clients
pub mod services;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Settings and service wiring
pub mod config;

// Tracing setup
pub mod logging;
