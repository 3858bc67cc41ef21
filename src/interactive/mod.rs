//! Interactive terminal game

mod app;
mod rendering;

pub use app::{App, HINT_LIMIT, Hint, Message, MessageStyle, Statistics, run_tui};
