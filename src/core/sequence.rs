//! Peg sequences
//!
//! A `Sequence` is an ordered row of colors, used both for guesses and for
//! candidate secrets. Colors are single digits so a sequence can be typed as
//! plain text such as `0123`.

use super::GameConfig;
use std::fmt;
use thiserror::Error;

/// Largest supported number of colors (one decimal digit per color)
pub const MAX_COLORS: u8 = 10;

/// A fixed-length row of colors
///
/// Ordering is lexicographic over the colors, which is also the order the
/// search space is generated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Vec<u8>);

/// Reasons typed text cannot become a [`Sequence`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Please provide a guess with {expected} numbers.")]
    WrongLength { expected: usize, actual: usize },

    #[error("Please only provide digits from 0 to {max}")]
    NotADigit { max: u8 },

    #[error("Please only provide digits from 0 to {max}")]
    ColorOutOfRange { color: u8, max: u8 },
}

impl Sequence {
    /// Create a sequence from raw colors
    ///
    /// # Errors
    /// Returns `SequenceError::ColorOutOfRange` if any color is `>= MAX_COLORS`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Sequence;
    ///
    /// let seq = Sequence::new(vec![0, 1, 2, 3]).unwrap();
    /// assert_eq!(seq.len(), 4);
    /// assert!(Sequence::new(vec![0, 10]).is_err());
    /// ```
    pub fn new(colors: Vec<u8>) -> Result<Self, SequenceError> {
        if let Some(&color) = colors.iter().find(|&&c| c >= MAX_COLORS) {
            return Err(SequenceError::ColorOutOfRange {
                color,
                max: MAX_COLORS - 1,
            });
        }
        Ok(Self(colors))
    }

    /// Colors already known to be below `MAX_COLORS`
    pub(crate) const fn from_colors_unchecked(colors: Vec<u8>) -> Self {
        Self(colors)
    }

    /// Parse a player's typed guess against a game configuration
    ///
    /// Length is checked first, then each character must be a digit below the
    /// configured color count.
    ///
    /// # Errors
    /// Returns the `SequenceError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{GameConfig, Sequence};
    ///
    /// let config = GameConfig::new(6, 4).unwrap();
    /// let seq = Sequence::parse("0125", &config).unwrap();
    /// assert_eq!(seq.colors(), &[0, 1, 2, 5]);
    ///
    /// assert!(Sequence::parse("012", &config).is_err());
    /// assert!(Sequence::parse("0126", &config).is_err());
    /// assert!(Sequence::parse("01.2", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, SequenceError> {
        let max = config.colors() - 1;
        let length = text.chars().count();
        if length != config.holes() {
            return Err(SequenceError::WrongLength {
                expected: config.holes(),
                actual: length,
            });
        }

        let colors = text
            .chars()
            .map(|ch| {
                let digit = ch.to_digit(10).ok_or(SequenceError::NotADigit { max })?;
                // to_digit(10) is always < 10
                let color = digit as u8;
                if color > max {
                    return Err(SequenceError::ColorOutOfRange { color, max });
                }
                Ok(color)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(colors))
    }

    /// The colors of this sequence, in hole order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.0
    }

    /// Number of holes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of each color, indexed by color
    #[inline]
    pub(crate) fn color_counts(&self) -> [usize; MAX_COLORS as usize] {
        let mut counts = [0; MAX_COLORS as usize];
        for &color in &self.0 {
            counts[usize::from(color)] += 1;
        }
        counts
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(colors: u32, holes: usize) -> GameConfig {
        GameConfig::new(colors, holes).unwrap()
    }

    #[test]
    fn parse_valid_guess() {
        let seq = Sequence::parse("0123", &config(6, 4)).unwrap();
        assert_eq!(seq.colors(), &[0, 1, 2, 3]);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(
            Sequence::parse("01234", &config(6, 4)),
            Err(SequenceError::WrongLength {
                expected: 4,
                actual: 5
            })
        );
        assert!(matches!(
            Sequence::parse("", &config(6, 4)),
            Err(SequenceError::WrongLength { actual: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_decimals_and_negatives() {
        assert_eq!(
            Sequence::parse("1.23", &config(6, 4)),
            Err(SequenceError::NotADigit { max: 5 })
        );
        assert_eq!(
            Sequence::parse("-123", &config(6, 4)),
            Err(SequenceError::NotADigit { max: 5 })
        );
        assert!(Sequence::parse("ab12", &config(6, 4)).is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_colors() {
        assert_eq!(
            Sequence::parse("0126", &config(6, 4)),
            Err(SequenceError::ColorOutOfRange { color: 6, max: 5 })
        );
        // Every digit is usable with ten colors
        assert!(Sequence::parse("9999", &config(10, 4)).is_ok());
    }

    #[test]
    fn error_messages_match_prompts() {
        let err = Sequence::parse("01", &config(6, 4)).unwrap_err();
        assert_eq!(err.to_string(), "Please provide a guess with 4 numbers.");

        let err = Sequence::parse("0179", &config(6, 4)).unwrap_err();
        assert_eq!(err.to_string(), "Please only provide digits from 0 to 5");
    }

    #[test]
    fn new_rejects_colors_above_max() {
        assert!(Sequence::new(vec![9, 9]).is_ok());
        assert_eq!(
            Sequence::new(vec![1, 10]),
            Err(SequenceError::ColorOutOfRange { color: 10, max: 9 })
        );
    }

    #[test]
    fn color_counts_with_repeats() {
        let seq = Sequence::new(vec![2, 2, 0, 2]).unwrap();
        let counts = seq.color_counts();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 0);
        assert_eq!(counts[2], 3);
    }

    #[test]
    fn display_is_digit_string() {
        let seq = Sequence::new(vec![0, 2, 1, 4]).unwrap();
        assert_eq!(seq.to_string(), "0214");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Sequence::new(vec![0, 1, 1]).unwrap();
        let b = Sequence::new(vec![1, 0, 0]).unwrap();
        assert!(a < b);
    }
}
