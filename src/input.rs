//! This module contains all functions related to taking input from the player. The prompts use the
//! `dialoguer` crate and re-prompt until the entry is valid, and the same rules back the parser for
//! frame sheets given on the command line.
//!
//! The rules here are those of play, stricter than what the scoring engine checks: the two rolls of
//! frames one to nine never knock down more than ten pins, a strike ends those frames early, and
//! the tenth frame gets a third roll only after a strike or a spare.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use regex::Regex;

use crate::game::{Game, ScoreError, FRAME_COUNT};
use crate::roll::MAX_PINS;

/// This structure holds the rolls entered for one frame, after they have been checked against the
/// rules of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameEntry {
    /// The pins knocked down by the first roll.
    first: u8,
    /// The pins knocked down by the second roll; `0` after a strike in frames one to nine.
    second: u8,
    /// The pins knocked down by the bonus roll of the tenth frame.
    third: Option<u8>,
}

impl FrameEntry {
    /// This function adds the frame to the end of the given game.
    fn add_to(self, game: &mut Game) -> Result<(), ScoreError> {
        game.add_frame(
            i32::from(self.first),
            i32::from(self.second),
            self.third.map(i32::from),
        )
    }

    /// This function checks a full set of rolls for the frame with the given number, counting
    /// from one, and returns the entry if the rolls could have been played.
    fn checked(
        number: usize,
        first: u8,
        second: u8,
        third: Option<u8>,
    ) -> Result<Self, &'static str> {
        check_pins(first)?;
        check_second(number, first, second)?;

        match (number == FRAME_COUNT && earns_third(first, second), third) {
            (true, Some(bonus)) => check_third(first, second, bonus)?,
            (true, None) => return Err("A strike or spare in the last frame earns a third roll"),
            (false, Some(_)) if number < FRAME_COUNT => {
                return Err("Only the last frame can have a third roll")
            }
            (false, Some(_)) => return Err("A third roll needs a strike or spare first"),
            (false, None) => {}
        }

        Ok(Self {
            first,
            second,
            third,
        })
    }
}

/// This structure holds a whole game written out as a frame sheet, ready to be scored without
/// prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrameSheet {
    /// The ten checked frames of the sheet, in play order.
    frames: Vec<FrameEntry>,
}

impl FrameSheet {
    /// This function plays the frames of the sheet into a new game.
    pub(crate) fn into_game(self) -> Result<Game, ScoreError> {
        let mut game = Game::new();
        for entry in self.frames {
            entry.add_to(&mut game)?;
        }
        Ok(game)
    }
}

/// This function checks that a roll is within the rack.
fn check_pins(pins: u8) -> Result<(), &'static str> {
    if pins <= MAX_PINS {
        Ok(())
    } else {
        Err("A roll knocks down between 0 and 10 pins")
    }
}

/// This function checks the second roll of the frame with the given number. The rack is only set up
/// again between the two rolls after a strike in the last frame; everywhere else the two rolls
/// share ten pins.
fn check_second(number: usize, first: u8, second: u8) -> Result<(), &'static str> {
    check_pins(second)?;

    let fresh_rack = number == FRAME_COUNT && first == MAX_PINS;
    if !fresh_rack && first.saturating_add(second) > MAX_PINS {
        return Err("The two rolls of a frame cannot knock down more than 10 pins");
    }

    Ok(())
}

/// This function checks the bonus roll of the last frame. After a strike followed by a roll that
/// left pins standing, the bonus roll can only knock down what is left.
fn check_third(first: u8, second: u8, third: u8) -> Result<(), &'static str> {
    check_pins(third)?;

    let leftover = first == MAX_PINS && second < MAX_PINS;
    if leftover && second.saturating_add(third) > MAX_PINS {
        return Err("The bonus roll cannot knock down more pins than were left standing");
    }

    Ok(())
}

/// This function tells whether the first two rolls of the last frame earn a third one.
const fn earns_third(first: u8, second: u8) -> bool {
    first == MAX_PINS || first.saturating_add(second) == MAX_PINS
}

/// This function parses a single frame of a sheet, such as `X`, `7,3` or `10,10,10`.
fn parse_frame(re: &Regex, number: usize, token: &str) -> Result<FrameEntry, String> {
    if !re.is_match(token) {
        return Err(format!(
            "Frame {number}: '{token}' is not a list of up to three rolls"
        ));
    }

    let rolls = token
        .split(',')
        .map(|roll| {
            if roll.eq_ignore_ascii_case("x") {
                Ok(MAX_PINS)
            } else {
                roll.parse::<u8>().map_err(|err| err.to_string())
            }
        })
        .collect::<Result<Vec<u8>, String>>()?;

    let (first, second, third) = match *rolls.as_slice() {
        [first] if number < FRAME_COUNT && first == MAX_PINS => (first, 0, None),
        [first, second] => (first, second, None),
        [first, second, third] => (first, second, Some(third)),
        _ => return Err(format!("Frame {number}: '{token}' is missing a roll")),
    };

    FrameEntry::checked(number, first, second, third)
        .map_err(|msg| format!("Frame {number}: {msg}"))
}

/// This function serves as a value parser for the `--frames` argument. A sheet is ten frames
/// separated by whitespace, each made up of one to three comma-separated rolls written as numbers
/// or as `X` for a strike. A strike in frames one to nine may be written on its own.
pub(crate) fn parse_sheet(sheet: &str) -> Result<FrameSheet, String> {
    let re = Regex::new(r"\A(?:10|\d|[xX])(?:,(?:10|\d|[xX])){0,2}\z")
        .map_err(|err| err.to_string())?;
    let tokens: Vec<&str> = sheet.split_whitespace().collect();

    if tokens.len() != FRAME_COUNT {
        return Err(format!(
            "A sheet holds {FRAME_COUNT} frames, but {} were given",
            tokens.len()
        ));
    }

    let frames = tokens
        .into_iter()
        .zip(1..)
        .map(|(token, number)| parse_frame(&re, number, token))
        .collect::<Result<Vec<FrameEntry>, String>>()?;

    Ok(FrameSheet { frames })
}

/// This function asks the player whether they want to score another game.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Score another game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(again)
}

/// This function prompts for all ten frames of a game, one roll at a time, and returns the complete
/// game.
pub(crate) fn take_game(term: &Term) -> Result<Game> {
    let mut game = Game::new();

    for number in 1..=FRAME_COUNT {
        let entry = take_frame(term, number)?;
        entry.add_to(&mut game)?;
    }

    Ok(game)
}

/// This function prompts for the rolls of the frame with the given number. A strike in frames one
/// to nine ends the frame right away, and the last frame asks for a third roll when one was earned.
fn take_frame(term: &Term, number: usize) -> Result<FrameEntry> {
    let last = number == FRAME_COUNT;
    let first = take_roll(term, number, 1, check_pins)?;

    if !last && first == MAX_PINS {
        term.write_line(&format!("{}", style("Strike!").bold().green()))?;
        return Ok(FrameEntry {
            first,
            second: 0,
            third: None,
        });
    }

    let second = take_roll(term, number, 2, move |pins| check_second(number, first, pins))?;

    let third = if last && earns_third(first, second) {
        Some(take_roll(term, number, 3, move |pins| {
            check_third(first, second, pins)
        })?)
    } else {
        None
    };

    Ok(FrameEntry {
        first,
        second,
        third,
    })
}

/// This function is in charge of taking the input for a single roll. Anything that is not a whole
/// number of pins, or that the given check turns down, is rejected and asked for again.
fn take_roll<F>(term: &Term, number: usize, trial: u8, mut check: F) -> Result<u8>
where
    F: FnMut(u8) -> Result<(), &'static str> + 'static,
{
    let pins: u8 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Frame {number}, roll {trial}")).bold()
        ))
        .validate_with(move |pins: &u8| check(*pins))
        .interact_text_on(term)?;

    tracing::trace!(frame = number, trial, pins, "roll entered");
    Ok(pins)
}
