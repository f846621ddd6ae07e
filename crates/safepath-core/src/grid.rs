//! The [`RadiationGrid`] type: an immutable, rectangular matrix of
//! non-negative radiation levels.
//!
//! Every constructor checks its dimensions, so a `RadiationGrid` always has at
//! least one row and one column. Values live in a single row-major buffer.

use std::fmt;

use thiserror::Error;

use crate::geom::{Cell, Range};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Reasons a matrix cannot be turned into a [`RadiationGrid`].
///
/// All variants describe invalid dimensions: either a side is zero, or the
/// supplied data disagrees with the declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer's length is not `rows * cols`.
    #[error("expected {} values for a {rows}x{cols} grid, got {found}", .rows * .cols)]
    LengthMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },
    /// A side does not fit the signed coordinate space.
    #[error("grid of {rows}x{cols} exceeds the addressable coordinate space")]
    TooLarge { rows: usize, cols: usize },
}

// ---------------------------------------------------------------------------
// RadiationGrid
// ---------------------------------------------------------------------------

/// A rectangular `rows × cols` matrix of radiation levels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct RadiationGrid {
    values: Vec<u32>,
    bounds: Range,
}

fn checked_bounds(rows: usize, cols: usize) -> Result<Range, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty { rows, cols });
    }
    let (Ok(r), Ok(c)) = (i32::try_from(rows), i32::try_from(cols)) else {
        return Err(GridError::TooLarge { rows, cols });
    };
    if rows.checked_mul(cols).is_none() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(Range::with_size(r, c))
}

impl RadiationGrid {
    /// Build a grid from a slice of rows. All rows must have the same,
    /// non-zero length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let bounds = checked_bounds(rows.len(), cols)?;
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self { values, bounds })
    }

    /// Build a grid from a row-major buffer of exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<u32>) -> Result<Self, GridError> {
        let bounds = checked_bounds(rows, cols)?;
        if values.len() != rows * cols {
            return Err(GridError::LengthMismatch {
                rows,
                cols,
                found: values.len(),
            });
        }
        Ok(Self { values, bounds })
    }

    /// A grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: u32) -> Result<Self, GridError> {
        let bounds = checked_bounds(rows, cols)?;
        Ok(Self {
            values: vec![value; rows * cols],
            bounds,
        })
    }

    /// A grid whose cells are produced by `f`, called in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Cell) -> u32,
    ) -> Result<Self, GridError> {
        let bounds = checked_bounds(rows, cols)?;
        let values = bounds.iter().map(&mut f).collect();
        Ok(Self { values, bounds })
    }

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows (N).
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows() as usize
    }

    /// Number of columns (M).
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols() as usize
    }

    /// The top-left cell.
    #[inline]
    pub fn origin(&self) -> Cell {
        self.bounds.min
    }

    /// The bottom-right cell (N-1, M-1).
    #[inline]
    pub fn target(&self) -> Cell {
        // Bounds are never empty, so `last` always has a cell.
        self.bounds.last().unwrap_or(self.bounds.min)
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// The radiation level at `c`, or `None` if out of bounds.
    #[inline]
    pub fn value(&self, c: Cell) -> Option<u32> {
        if !self.contains(c) {
            return None;
        }
        let idx = c.row as usize * self.cols() + c.col as usize;
        self.values.get(idx).copied()
    }

    /// One row as a slice, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.rows() {
            return None;
        }
        let cols = self.cols();
        let start = row * cols;
        self.values.get(start..start + cols)
    }

    /// Row-major iterator over `(cell, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.bounds.iter().zip(self.values.iter().copied())
    }

    /// The largest value in the grid.
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for RadiationGrid {
    /// One line per row, values separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.chunks(self.cols()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Wire shape of a [`RadiationGrid`]: the nested rows. Deserializing goes
/// back through [`RadiationGrid::from_rows`] so the shape is re-checked.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    rows: Vec<Vec<u32>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for RadiationGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        RadiationGrid::from_rows(&raw.rows)
    }
}

#[cfg(feature = "serde")]
impl From<RadiationGrid> for RawGrid {
    fn from(grid: RadiationGrid) -> Self {
        let cols = grid.cols();
        RawGrid {
            rows: grid.values.chunks(cols).map(<[u32]>::to_vec).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RadiationGrid {
        RadiationGrid::from_rows(&[[1, 3, 5], [2, 8, 2], [4, 2, 1]]).unwrap()
    }

    #[test]
    fn from_rows_shape_and_values() {
        let g = sample();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.origin(), Cell::new(0, 0));
        assert_eq!(g.target(), Cell::new(2, 2));
        assert_eq!(g.value(Cell::new(1, 1)), Some(8));
        assert_eq!(g.value(Cell::new(2, 0)), Some(4));
        assert_eq!(g.value(Cell::new(3, 0)), None);
        assert_eq!(g.value(Cell::new(0, -1)), None);
        assert_eq!(g.row(1), Some(&[2, 8, 2][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.max_value(), 8);
    }

    #[test]
    fn row_index_far_out_of_bounds() {
        let g = RadiationGrid::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(g.row(1), Some(&[3, 4][..]));
        assert_eq!(g.row(2), None);
        assert_eq!(g.row(1usize << 63), None);
        assert_eq!(g.row(usize::MAX), None);
    }

    #[test]
    fn non_square_target() {
        let g = RadiationGrid::from_rows(&[vec![1, 2, 3, 4], vec![5, 6, 7, 8]]).unwrap();
        assert_eq!(g.target(), Cell::new(1, 3));
        assert_eq!(g.value(g.target()), Some(8));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let no_rows: [Vec<u32>; 0] = [];
        assert_eq!(
            RadiationGrid::from_rows(&no_rows),
            Err(GridError::Empty { rows: 0, cols: 0 })
        );
        assert_eq!(
            RadiationGrid::from_rows(&[Vec::<u32>::new(), Vec::new()]),
            Err(GridError::Empty { rows: 2, cols: 0 })
        );
        assert_eq!(
            RadiationGrid::filled(0, 5, 0),
            Err(GridError::Empty { rows: 0, cols: 5 })
        );
        assert!(RadiationGrid::from_vec(3, 0, vec![]).is_err());
        assert!(RadiationGrid::from_fn(0, 0, |_| 1).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = RadiationGrid::from_rows(&[vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "row 1 has 2 values, expected 3");
    }

    #[test]
    fn flat_length_must_match() {
        let err = RadiationGrid::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                rows: 2,
                cols: 2,
                found: 3
            }
        );
        assert_eq!(err.to_string(), "expected 4 values for a 2x2 grid, got 3");

        let g = RadiationGrid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(g.value(Cell::new(1, 0)), Some(3));
    }

    #[test]
    fn oversized_sides_are_rejected() {
        let huge = i32::MAX as usize + 1;
        assert_eq!(
            RadiationGrid::filled(huge, 1, 0),
            Err(GridError::TooLarge { rows: huge, cols: 1 })
        );
    }

    #[test]
    fn filled_and_from_fn() {
        let z = RadiationGrid::filled(2, 3, 0).unwrap();
        assert!(z.iter().all(|(_, v)| v == 0));
        assert_eq!(z.max_value(), 0);

        let g = RadiationGrid::from_fn(2, 3, |c| (c.row * 10 + c.col) as u32).unwrap();
        assert_eq!(g.value(Cell::new(1, 2)), Some(12));
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells[4], (Cell::new(1, 1), 11));
    }

    #[test]
    fn display_is_row_per_line() {
        assert_eq!(sample().to_string(), "1 3 5\n2 8 2\n4 2 1");
        let single = RadiationGrid::from_rows(&[[5]]).unwrap();
        assert_eq!(single.to_string(), "5");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = RadiationGrid::from_rows(&[[10, 10], [10, 10]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"rows":[[10,10],[10,10]]}"#);
        let back: RadiationGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_json_is_rejected() {
        let res: Result<RadiationGrid, _> = serde_json::from_str(r#"{"rows":[[1,2],[3]]}"#);
        assert!(res.is_err());
        let res: Result<RadiationGrid, _> = serde_json::from_str(r#"{"rows":[]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
