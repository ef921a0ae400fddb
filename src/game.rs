//! The game module contains the scoring engine: the ten frames of a game in play order, and the
//! algorithm that turns them into a score by adding strike and spare bonuses taken from the frames
//! that follow.
//!
//! A game starts out empty and takes frames one at a time through [`Game::add_frame`]. Once the
//! tenth frame is in, the game is complete: it takes no more frames and can be scored.

use crate::frame::Frame;
use crate::roll::InvalidRollError;

/// The number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// This enum holds every way in which building or scoring a game can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A frame was added to a game that already has all ten.
    #[error("the game already has all {FRAME_COUNT} frames")]
    GameComplete,
    /// The game was scored before all ten frames were added.
    #[error("the game has {frames} of {FRAME_COUNT} frames and cannot be scored yet")]
    GameIncomplete {
        /// The number of frames added so far.
        frames: usize,
    },
    /// One of the first two rolls of a frame was not a valid pin count.
    #[error(transparent)]
    InvalidRoll(#[from] InvalidRollError),
}

/// A single game of ten-pin bowling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    /// The frames added so far, in the order they were played.
    frames: Vec<Frame>,
}

impl Game {
    /// Adds the next frame of the game.
    ///
    /// The first two pin counts must be valid rolls. The third one is only attached when it is
    /// present and within `0..=10`; an out of range third count is dropped without an error, so
    /// callers that care must check it beforehand. Whether a frame may have a third roll at all is
    /// the caller's concern too.
    ///
    /// Nothing is added when this returns an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidRoll`] if `first` or `second` is outside of `0..=10`, and
    /// [`ScoreError::GameComplete`] if the game already has ten frames.
    pub fn add_frame(
        &mut self,
        first: i32,
        second: i32,
        third: Option<i32>,
    ) -> Result<(), ScoreError> {
        let mut frame = Frame::new(first, second)?;

        if self.is_game_complete() {
            return Err(ScoreError::GameComplete);
        }

        if let Some(pins) = third {
            if let Err(err) = frame.set_third_roll(pins) {
                tracing::debug!(%err, "dropping out of range bonus roll");
            }
        }

        tracing::debug!(
            frame = self.frames.len() + 1,
            first,
            second,
            third = ?frame.third_pins(),
            "frame added"
        );
        self.frames.push(frame);

        Ok(())
    }

    /// Returns how many bonus pins the frame at `index` earns from the frames after it. The last
    /// frame never earns a bonus, and any frame that is not there counts as zero pins.
    fn bonus(&self, index: usize) -> u32 {
        let last = index + 1 >= FRAME_COUNT;
        let (Some(frame), Some(next)) = (self.frames.get(index), self.frames.get(index + 1)) else {
            return 0;
        };

        if last {
            0
        } else if frame.is_strike() {
            // after two strikes in a row, the second bonus roll is the first roll of the frame
            // after next, except at the tenth frame which holds both rolls itself
            let second_bonus = if next.is_strike() && index + 2 < FRAME_COUNT {
                self.frames.get(index + 2).map_or(0, Frame::first_pins)
            } else {
                next.second_pins()
            };
            u32::from(next.first_pins()) + u32::from(second_bonus)
        } else if frame.is_spare() {
            u32::from(next.first_pins())
        } else {
            0
        }
    }

    /// Returns the total score of the game. Scoring does not change the game, so calling this more
    /// than once yields the same total.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::GameIncomplete`] unless all ten frames have been added.
    pub fn calculate_score(&self) -> Result<u32, ScoreError> {
        let total = self.frame_scores()?.into_iter().sum();
        tracing::info!(total, "game scored");
        Ok(total)
    }

    /// Returns what each frame adds to the score of the game: its own pins plus its bonus.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::GameIncomplete`] unless all ten frames have been added.
    pub fn frame_scores(&self) -> Result<Vec<u32>, ScoreError> {
        if !self.is_game_complete() {
            return Err(ScoreError::GameIncomplete {
                frames: self.frames.len(),
            });
        }

        Ok(self
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| frame.score() + self.bonus(index))
            .collect())
    }

    /// Returns the frames added so far, in play order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns true once all ten frames have been added.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.frames.len() == FRAME_COUNT
    }

    /// Creates a game with no frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score after each frame, the way a scorecard shows it.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::GameIncomplete`] unless all ten frames have been added.
    pub fn running_totals(&self) -> Result<Vec<u32>, ScoreError> {
        Ok(self
            .frame_scores()?
            .into_iter()
            .scan(0, |total, score| {
                *total += score;
                Some(*total)
            })
            .collect())
    }
}
