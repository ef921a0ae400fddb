//! This module turns a scored game into the lines of a scorecard, the way they are marked at the
//! lanes: `X` for a strike, `/` for a spare and `-` for a roll that missed every pin.

use console::{pad_str, style, Alignment};

use crate::frame::{Frame, FrameKind};
use crate::game::{Game, ScoreError, FRAME_COUNT};
use crate::roll::MAX_PINS;

/// The width of a single frame cell on the scorecard, without its borders.
const CELL: usize = 7;

/// This function returns the mark for a roll that was thrown at a full rack.
fn fresh_mark(pins: u8) -> String {
    if pins == MAX_PINS {
        "X".to_owned()
    } else {
        plain_mark(pins)
    }
}

/// This function returns the marks for every roll of a frame. Strikes in frames one to nine only
/// show their single roll.
pub(crate) fn frame_marks(frame: &Frame, last: bool) -> Vec<String> {
    let first = frame.first_pins();
    let second = frame.second_pins();

    if !last {
        return match frame.kind() {
            FrameKind::Strike => vec!["X".to_owned()],
            FrameKind::Spare => vec![plain_mark(first), "/".to_owned()],
            FrameKind::Open => vec![plain_mark(first), plain_mark(second)],
        };
    }

    let mut marks = vec![fresh_mark(first)];
    marks.push(match frame.kind() {
        FrameKind::Strike => fresh_mark(second),
        FrameKind::Spare => "/".to_owned(),
        FrameKind::Open => plain_mark(second),
    });

    if let Some(third) = frame.third_pins() {
        // the rack is only reset for the bonus roll when the second roll cleared it
        let leftover = frame.is_strike() && second < MAX_PINS;
        marks.push(if leftover && second.saturating_add(third) == MAX_PINS {
            "/".to_owned()
        } else if leftover {
            plain_mark(third)
        } else {
            fresh_mark(third)
        });
    }

    marks
}

/// This function returns the mark for a roll that left pins standing.
fn plain_mark(pins: u8) -> String {
    if pins == 0 {
        "-".to_owned()
    } else {
        pins.to_string()
    }
}

/// This function lays out the three rows of a scorecard for a complete game: the frame numbers,
/// the roll marks and the running totals.
///
/// # Errors
///
/// Returns [`ScoreError::GameIncomplete`] when the game is missing frames.
pub(crate) fn scorecard(game: &Game) -> Result<Vec<String>, ScoreError> {
    let totals = game.running_totals()?;
    let mut numbers = String::from("|");
    let mut rolls = String::from("|");
    let mut running = String::from("|");

    for ((index, frame), total) in game.frames().iter().enumerate().zip(totals) {
        let marks = frame_marks(frame, index + 1 == FRAME_COUNT).join(" ");

        numbers.push_str(&pad_str(&(index + 1).to_string(), CELL, Alignment::Center, None));
        numbers.push('|');
        rolls.push_str(&pad_str(&marks, CELL, Alignment::Center, None));
        rolls.push('|');
        running.push_str(&pad_str(&total.to_string(), CELL, Alignment::Center, None));
        running.push('|');
    }

    Ok(vec![numbers, rolls, running])
}

/// This function returns the closing line with the final score of the game.
pub(crate) fn total_line(total: u32) -> String {
    format!("{}", style(format!("Total score: {total}")).bold())
}

#[cfg(test)]
mod tests {
    use super::{frame_marks, scorecard};
    use crate::frame::Frame;
    use crate::game::Game;

    /// Builds a tenth frame with a third roll.
    fn bonus_frame(first: i32, second: i32, third: i32) -> Frame {
        let mut frame = Frame::new(first, second).expect("valid frame");
        frame.set_third_roll(third).expect("valid third roll");
        frame
    }

    #[test]
    fn marks_regular_frames() {
        let strike = Frame::new(10, 0).expect("valid frame");
        assert_eq!(frame_marks(&strike, false), ["X"], "strike");

        let spare = Frame::new(0, 10).expect("valid frame");
        assert_eq!(frame_marks(&spare, false), ["-", "/"], "spare");

        let open = Frame::new(8, 0).expect("valid frame");
        assert_eq!(frame_marks(&open, false), ["8", "-"], "open frame");
    }

    #[test]
    fn marks_every_roll_of_the_last_frame() {
        assert_eq!(
            frame_marks(&bonus_frame(10, 10, 10), true),
            ["X", "X", "X"],
            "three strikes"
        );
        assert_eq!(
            frame_marks(&bonus_frame(10, 7, 3), true),
            ["X", "7", "/"],
            "strike then spare"
        );
        assert_eq!(
            frame_marks(&bonus_frame(10, 7, 0), true),
            ["X", "7", "-"],
            "strike then open"
        );
        assert_eq!(
            frame_marks(&bonus_frame(9, 1, 10), true),
            ["9", "/", "X"],
            "spare then strike"
        );
        assert_eq!(
            frame_marks(&Frame::new(3, 4).expect("valid frame"), true),
            ["3", "4"],
            "open last frame"
        );
    }

    #[test]
    fn scorecard_has_three_rows() {
        let mut game = Game::new();
        for _ in 0..9 {
            game.add_frame(10, 0, None).expect("valid frame");
        }
        game.add_frame(10, 10, Some(10)).expect("valid frame");

        let rows = scorecard(&game).expect("complete game");
        assert_eq!(rows.len(), 3, "numbers, marks and totals");
        assert!(
            rows.get(2).is_some_and(|row| row.contains("300")),
            "final total shows up"
        );
        assert!(
            rows.get(1).is_some_and(|row| row.contains("X X X")),
            "last frame marks"
        );
    }

    #[test]
    fn scorecard_needs_a_complete_game() {
        assert!(scorecard(&Game::new()).is_err(), "empty game");
    }
}
