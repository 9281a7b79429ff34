//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, Reply, Statistics, run_tui};
