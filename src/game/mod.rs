//! Guess-the-Achievement mini-game
//!
//! Self-contained: owns its question bank and UI strings, reads nothing from
//! the content store and hands nothing back to the dispatcher.

pub mod quiz;
pub mod view;

pub use quiz::{GuessOutcome, QuizBank, QuizError, QuizQuestion, QuizSession};
pub use view::{render, render_fresh};
