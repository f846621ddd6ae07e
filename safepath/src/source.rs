//! Grid sources: built-in samples, random fills and explicit values.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safepath_core::{GridError, RadiationGrid};

use crate::cli::Source;

/// Sample 1: the best route detours down the left column (bottleneck 4).
pub const SAMPLE_1: [[u32; 3]; 3] = [[1, 3, 5], [2, 8, 2], [4, 2, 1]];

/// Sample 2: a uniform grid where every route has bottleneck 10.
pub const SAMPLE_2: [[u32; 2]; 2] = [[10, 10], [10, 10]];

/// Levels drawn for random grids.
const RANDOM_LEVELS: std::ops::RangeInclusive<u32> = 1..=9;

/// Build the grid described by `source`.
pub fn build_grid(source: &Source) -> Result<RadiationGrid, GridError> {
    match source {
        Source::Sample { number: 2 } => RadiationGrid::from_rows(&SAMPLE_2),
        Source::Sample { .. } => RadiationGrid::from_rows(&SAMPLE_1),
        Source::Random { rows, cols, seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            info!("random {rows}x{cols} grid, seed {seed}");
            random_grid(*rows as usize, *cols as usize, seed)
        }
        Source::Grid { rows, cols, values } => {
            RadiationGrid::from_vec(*rows, *cols, values.clone())
        }
        Source::Zeros { rows, cols } => RadiationGrid::filled(*rows, *cols, 0),
    }
}

/// A grid of uniformly random levels, reproducible from `seed`.
pub fn random_grid(rows: usize, cols: usize, seed: u64) -> Result<RadiationGrid, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    RadiationGrid::from_fn(rows, cols, |_| rng.random_range(RANDOM_LEVELS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples() {
        let g = build_grid(&Source::Sample { number: 1 }).unwrap();
        assert_eq!(g.to_string(), "1 3 5\n2 8 2\n4 2 1");
        let g = build_grid(&Source::Sample { number: 2 }).unwrap();
        assert_eq!(g.to_string(), "10 10\n10 10");
    }

    #[test]
    fn random_is_seeded_and_in_range() {
        let a = random_grid(15, 15, 3).unwrap();
        let b = random_grid(15, 15, 3).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|(_, v)| RANDOM_LEVELS.contains(&v)));

        let g = build_grid(&Source::Random {
            rows: 4,
            cols: 6,
            seed: None,
        })
        .unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 6));
    }

    #[test]
    fn explicit_values_must_fill_the_shape() {
        let g = build_grid(&Source::Grid {
            rows: 2,
            cols: 3,
            values: vec![1, 2, 3, 4, 5, 6],
        })
        .unwrap();
        assert_eq!(g.to_string(), "1 2 3\n4 5 6");

        let err = build_grid(&Source::Grid {
            rows: 2,
            cols: 3,
            values: vec![1, 2, 3],
        })
        .unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                rows: 2,
                cols: 3,
                found: 3
            }
        );
    }

    #[test]
    fn zeros() {
        let g = build_grid(&Source::Zeros { rows: 2, cols: 2 }).unwrap();
        assert_eq!(g.max_value(), 0);
        assert!(build_grid(&Source::Zeros { rows: 0, cols: 2 }).is_err());
    }
}
