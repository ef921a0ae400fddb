//! # bowlscore
//!
//! This crate scores a game of ten-pin bowling. The player enters the pins knocked down by every
//! roll, frame by frame, and gets back a scorecard with the bonuses for strikes and spares worked
//! in and the final score of the game.
//!
//! A whole game can also be given at once as a frame sheet through the `--frames` option, which
//! scores it without prompting.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use bowlscore::init;

fn main() -> Result<()> {
    init()
}
