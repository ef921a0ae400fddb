//! This module holds the frame, the unit a game is scored in. A frame groups the rolls of one turn
//! and answers questions about them, but it never looks at other frames; bonuses are the game's
//! business.

use crate::roll::{InvalidRollError, Roll};

/// This enum is a tagged view over the rolls of a frame, used wherever the kind of frame matters
/// more than its individual pin counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Fewer than ten pins fell across the first two rolls.
    Open,
    /// The first two rolls together knocked down the full rack.
    Spare,
    /// The first roll knocked down the full rack.
    Strike,
}

/// One of the ten scoring units of a game.
///
/// A frame always stores two rolls. For frames one through nine a strike ends the turn after a
/// single roll, so a strike there must be recorded with `0` as its second roll; this is a hard
/// precondition of scoring, and the input layer fills that `0` in on its own. The optional third
/// roll only belongs to the tenth frame after a strike or a spare, which the frame itself does not
/// check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The opening roll of the frame.
    first: Roll,
    /// The second roll of the frame, or the `0` placeholder after a strike in frames one to nine.
    second: Roll,
    /// The bonus roll of the tenth frame.
    third: Option<Roll>,
}

impl Frame {
    /// Returns the pin count of the first roll.
    #[must_use]
    pub const fn first_pins(&self) -> u8 {
        self.first.pins()
    }

    /// Returns true if a third roll has been attached to the frame.
    #[must_use]
    pub const fn has_third_roll(&self) -> bool {
        self.third.is_some()
    }

    /// Returns true if the first two rolls knocked down ten pins between them. A strike stored as
    /// `(10, 0)` is a spare by this measure too, which is why [`Frame::kind`] checks for strikes
    /// first.
    #[must_use]
    pub const fn is_spare(&self) -> bool {
        self.first.is_spare(self.second)
    }

    /// Returns true if the first roll knocked down every pin.
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        self.first.is_strike()
    }

    /// Classifies the frame as a strike, a spare or an open frame.
    #[must_use]
    pub const fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Builds a frame out of its first two pin counts.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRollError`] for the first of the two counts that falls outside of
    /// `0..=10`.
    pub fn new(first: i32, second: i32) -> Result<Self, InvalidRollError> {
        Ok(Self {
            first: Roll::new(first)?,
            second: Roll::new(second)?,
            third: None,
        })
    }

    /// Returns the number of pins knocked down in this frame alone, without any bonus.
    #[must_use]
    pub fn score(&self) -> u32 {
        let own = u32::from(self.first.pins()) + u32::from(self.second.pins());
        own + self.third.map_or(0, |roll| u32::from(roll.pins()))
    }

    /// Returns the pin count of the second roll.
    #[must_use]
    pub const fn second_pins(&self) -> u8 {
        self.second.pins()
    }

    /// Attaches a third roll to the frame, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRollError`] if `pins` is outside of `0..=10`; the frame is left as it
    /// was.
    pub fn set_third_roll(&mut self, pins: i32) -> Result<(), InvalidRollError> {
        self.third = Some(Roll::new(pins)?);
        Ok(())
    }

    /// Returns the pin count of the third roll, if there is one.
    #[must_use]
    pub fn third_pins(&self) -> Option<u8> {
        self.third.map(Roll::pins)
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, FrameKind};
    use crate::roll::InvalidRollError;

    #[test]
    fn score_is_the_sum_of_its_own_rolls() {
        let mut frame = Frame::new(7, 3).expect("valid frame");
        assert_eq!(frame.score(), 10, "two rolls");

        frame.set_third_roll(6).expect("valid third roll");
        assert_eq!(frame.score(), 16, "three rolls");
        assert!(frame.has_third_roll(), "third roll attached");
        assert_eq!(frame.third_pins(), Some(6), "third roll pins");
    }

    #[test]
    fn rejects_either_bad_roll() {
        assert_eq!(
            Frame::new(11, 0),
            Err(InvalidRollError { pins: 11 }),
            "bad first roll"
        );
        assert_eq!(
            Frame::new(0, -1),
            Err(InvalidRollError { pins: -1 }),
            "bad second roll"
        );
    }

    #[test]
    fn bad_third_roll_leaves_frame_untouched() {
        let mut frame = Frame::new(10, 10).expect("valid frame");
        assert_eq!(
            frame.set_third_roll(12),
            Err(InvalidRollError { pins: 12 }),
            "third roll rejected"
        );
        assert!(!frame.has_third_roll(), "no third roll after failure");
        assert_eq!(frame.score(), 20, "score unchanged");
    }

    #[test]
    fn kind_prefers_strike_over_spare() {
        let strike = Frame::new(10, 0).expect("valid frame");
        assert!(strike.is_strike(), "ten on the first roll");
        assert!(strike.is_spare(), "the placeholder roll still totals ten");
        assert_eq!(strike.kind(), FrameKind::Strike, "strike wins");

        let spare = Frame::new(0, 10).expect("valid frame");
        assert!(!spare.is_strike(), "all ten on the second roll");
        assert_eq!(spare.kind(), FrameKind::Spare, "spare");

        let open = Frame::new(4, 5).expect("valid frame");
        assert_eq!(open.kind(), FrameKind::Open, "open frame");
        assert_eq!(open.first_pins(), 4, "first roll");
        assert_eq!(open.second_pins(), 5, "second roll");
    }
}
