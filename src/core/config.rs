//! Game configuration
//!
//! Holds the color and hole counts for one game and enforces the ranges the
//! core supports.

use super::{GameError, MAX_COLORS};
use tracing::warn;

/// Colors used when none are supplied
pub const DEFAULT_COLORS: u32 = 8;

/// Holes used when none are supplied
pub const DEFAULT_HOLES: usize = 5;

/// Largest search space a session will generate, `10^7` sequences
pub const MAX_SPACE: usize = 10_000_000;

/// Color and hole counts for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    colors: u8,
    holes: usize,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `colors` is outside
    /// `1..=10`, `holes` is zero, or `colors^holes` exceeds [`MAX_SPACE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4).unwrap();
    /// assert_eq!(config.space_size(), 1296);
    ///
    /// assert!(GameConfig::new(0, 4).is_err());
    /// assert!(GameConfig::new(6, 0).is_err());
    /// assert!(GameConfig::new(11, 4).is_err());
    /// ```
    pub fn new(colors: u32, holes: usize) -> Result<Self, GameError> {
        let invalid = |reason| GameError::InvalidConfiguration {
            colors,
            holes,
            reason,
        };

        if colors < 1 {
            return Err(invalid("at least one color is required"));
        }
        if colors > u32::from(MAX_COLORS) {
            return Err(invalid("at most 10 colors are supported"));
        }
        if holes < 1 {
            return Err(invalid("at least one hole is required"));
        }

        let exponent = u32::try_from(holes).map_err(|_| invalid("too many holes"))?;
        let space = (colors as usize)
            .checked_pow(exponent)
            .filter(|&space| space <= MAX_SPACE);
        if space.is_none() {
            return Err(invalid("search space exceeds 10^7 sequences"));
        }

        Ok(Self {
            colors: colors as u8,
            holes,
        })
    }

    /// Create a configuration, reducing more than 10 colors to 10
    ///
    /// This is the setup policy for player-supplied values.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` for zero colors or holes.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::clamped(12, 4).unwrap();
    /// assert_eq!(config.colors(), 10);
    /// ```
    pub fn clamped(colors: u32, holes: usize) -> Result<Self, GameError> {
        let limit = u32::from(MAX_COLORS);
        if colors > limit {
            warn!(requested = colors, limit, "clamping color count");
        }
        Self::new(colors.min(limit), holes)
    }

    /// Number of colors, each a digit in `0..colors`
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> u8 {
        self.colors
    }

    /// Number of holes in every sequence
    #[inline]
    #[must_use]
    pub const fn holes(&self) -> usize {
        self.holes
    }

    /// Size of the full search space, `colors^holes`
    #[must_use]
    pub fn space_size(&self) -> usize {
        // Bounded by MAX_SPACE in `new`
        (0..self.holes).fold(1, |acc, _| acc * usize::from(self.colors))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS as u8,
            holes: DEFAULT_HOLES,
        }
    }
}
