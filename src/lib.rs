//! The library components of the scorer. They hold the scoring engine for a game of ten-pin
//! bowling, along with the prompts and the scorecard that put it in front of a player.
//!
//! The engine is made of [`Roll`], [`Frame`] and [`Game`]; the latter adds up the pins of every
//! frame along with the bonuses strikes and spares earn from the rolls after them. The starting
//! point of the program itself is [`init()`], which contains the main game loop.
//!
//! A game takes its frames in play order through [`Game::add_frame`], and once all ten of them are
//! in, [`Game::calculate_score`] returns the total. A perfect game of twelve strikes is entered as
//! nine `(10, 0)` frames followed by `(10, 10, Some(10))`, and scores 300.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod frame;
mod game;
mod input;
mod messages;
mod play;
mod roll;

pub use frame::{Frame, FrameKind};
pub use game::{Game, ScoreError, FRAME_COUNT};
pub use play::init;
pub use roll::{InvalidRollError, Roll, MAX_PINS};
