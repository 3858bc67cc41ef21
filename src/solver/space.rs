//! Hypothesis space generation
//!
//! Enumerates every sequence of a given length over a color alphabet.

use crate::core::{GameConfig, GameError, Sequence};

/// Generate every possible secret for a configuration
///
/// Sequences of length `i + 1` are built from all sequences of length `i` by
/// appending each color in turn, so the result is in lexicographic order and
/// no recursion is involved.
///
/// # Examples
/// ```
/// use mastermind_solver::core::GameConfig;
/// use mastermind_solver::solver::space::generate;
///
/// let space = generate(&GameConfig::new(2, 3).unwrap());
/// assert_eq!(space.len(), 8);
/// assert_eq!(space[0].to_string(), "000");
/// assert_eq!(space[7].to_string(), "111");
/// ```
#[must_use]
pub fn generate(config: &GameConfig) -> Vec<Sequence> {
    let colors = config.colors();
    let holes = config.holes();

    let mut rows: Vec<Vec<u8>> = vec![Vec::with_capacity(holes)];
    for _ in 0..holes {
        let mut extended = Vec::with_capacity(rows.len() * usize::from(colors));
        for row in &rows {
            for color in 0..colors {
                let mut next = Vec::with_capacity(holes);
                next.extend_from_slice(row);
                next.push(color);
                extended.push(next);
            }
        }
        rows = extended;
    }

    rows.into_iter()
        .map(Sequence::from_colors_unchecked)
        .collect()
}

/// Generate the space from raw counts
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if the counts are out of range.
pub fn generate_for(colors: u32, holes: usize) -> Result<Vec<Sequence>, GameError> {
    Ok(generate(&GameConfig::new(colors, holes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn binary_three_holes() {
        let space = generate_for(2, 3).unwrap();
        let rendered: Vec<String> = space.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn single_color_single_sequence() {
        let space = generate_for(1, 4).unwrap();
        assert_eq!(space.len(), 1);
        assert_eq!(space[0].colors(), &[0, 0, 0, 0]);
    }

    #[test]
    fn single_hole_lists_colors() {
        let space = generate_for(5, 1).unwrap();
        assert_eq!(space.len(), 5);
        assert_eq!(space[4].colors(), &[4]);
    }

    #[test]
    fn invalid_configuration_rejected() {
        assert!(matches!(
            generate_for(0, 3),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            generate_for(3, 0),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn generation_is_sorted() {
        let space = generate_for(4, 3).unwrap();
        assert!(space.windows(2).all(|w| w[0] < w[1]));
    }

    proptest! {
        #[test]
        fn space_is_complete_and_unique(colors in 1u32..=6, holes in 1usize..=4) {
            let space = generate_for(colors, holes).unwrap();
            prop_assert_eq!(space.len(), (colors as usize).pow(holes as u32));

            let unique: FxHashSet<&Sequence> = space.iter().collect();
            prop_assert_eq!(unique.len(), space.len());

            for seq in &space {
                prop_assert_eq!(seq.len(), holes);
                prop_assert!(seq.colors().iter().all(|&c| u32::from(c) < colors));
            }
        }
    }
}
