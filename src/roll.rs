//! This module contains the smallest unit of a game: a single roll of the ball and the number of
//! pins it knocked down.

/// The number of pins standing on a fresh rack, and thus the most a single roll can knock down.
pub const MAX_PINS: u8 = 10;

/// This error is returned whenever a pin count outside of `0..=10` is used to build a roll.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid roll of {pins} pins; a roll knocks down between 0 and 10 pins")]
pub struct InvalidRollError {
    /// The rejected pin count, exactly as it was given.
    pub pins: i32,
}

/// A single delivery of the ball. It is only ever built through [`Roll::new`], so the pin count it
/// holds is always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    /// The number of pins knocked down by this roll.
    pins: u8,
}

impl Roll {
    /// Returns true if this roll and the one following it in the same frame knock down the full
    /// rack between them. The type does not know which frame a roll belongs to, so pairing the
    /// right two rolls is up to the caller.
    #[must_use]
    pub const fn is_spare(self, next: Self) -> bool {
        self.pins + next.pins == MAX_PINS
    }

    /// Returns true if this roll knocked down every pin.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.pins == MAX_PINS
    }

    /// Builds a roll from a raw pin count.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidRollError`] if `pins` is negative or greater than ten.
    pub fn new(pins: i32) -> Result<Self, InvalidRollError> {
        match u8::try_from(pins) {
            Ok(count) if count <= MAX_PINS => Ok(Self { pins: count }),
            _ => Err(InvalidRollError { pins }),
        }
    }

    /// Returns the number of pins knocked down by this roll.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.pins
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidRollError, Roll};

    #[test]
    fn accepts_every_count_on_the_rack() {
        for pins in 0..=10 {
            let roll = Roll::new(pins).expect("pin count within the rack");
            assert_eq!(i32::from(roll.pins()), pins, "roll keeps its pin count");
        }
    }

    #[test]
    fn rejects_counts_off_the_rack() {
        for pins in [-100, -1, 11, 12, 300, i32::MIN, i32::MAX] {
            assert_eq!(
                Roll::new(pins),
                Err(InvalidRollError { pins }),
                "{pins} pins should be rejected"
            );
        }
    }

    #[test]
    fn only_ten_pins_is_a_strike() {
        assert!(
            Roll::new(10).expect("valid roll").is_strike(),
            "ten pins is a strike"
        );
        for pins in 0..10 {
            assert!(
                !Roll::new(pins).expect("valid roll").is_strike(),
                "{pins} pins is not a strike"
            );
        }
    }

    #[test]
    fn spare_needs_both_rolls_to_total_ten() {
        for first in 0..=10 {
            for second in 0..=10 {
                let roll = Roll::new(first).expect("valid roll");
                let next = Roll::new(second).expect("valid roll");
                assert_eq!(
                    roll.is_spare(next),
                    first + second == 10,
                    "spare check for {first} then {second}"
                );
            }
        }
    }

    #[test]
    fn error_message_names_the_count() {
        let err = Roll::new(11).expect_err("eleven pins is not a roll");
        assert_eq!(
            err.to_string(),
            "invalid roll of 11 pins; a roll knocks down between 0 and 10 pins",
            "error message"
        );
    }
}
