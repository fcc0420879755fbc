//! The [`World`]: a dense 2D grid of per-cell traversal values.
//!
//! A terrain world stores elevations; a maze world stores [`WALL`]/[`FLOOR`]
//! markers. The search engine treats the world as read-only input and never
//! interprets the values itself — that is the cost model's job.

use crate::loc::Loc;

/// Marker value for an impassable maze cell.
pub const WALL: f64 = 0.0;

/// Marker value for a walkable maze cell.
pub const FLOOR: f64 = 1.0;

/// A dense row-major grid of `f64` cell values.
///
/// Out-of-bounds access through [`World::at`] or [`World::set`] is a
/// programming error and panics; use [`World::get`] or [`World::in_bounds`]
/// when a coordinate may be outside the grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl World {
    /// Create a new world filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Create a world by evaluating `f` at every location, row-major.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Loc) -> f64) -> Self {
        let mut w = Self::new(rows, cols, 0.0);
        for r in 0..rows {
            for c in 0..cols {
                let loc = Loc::new(r as i32, c as i32);
                let v = f(loc);
                w.set(loc, v);
            }
        }
        w
    }

    /// Create a world from nested row vectors.
    ///
    /// Panics if the rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == ncols,
                "ragged world rows: row {i} has {} columns, expected {ncols}",
                row.len()
            );
        }
        Self {
            rows: nrows,
            cols: ncols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Whether the location lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, loc: Loc) -> bool {
        loc.row >= 0
            && loc.col >= 0
            && (loc.row as usize) < self.rows
            && (loc.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, loc: Loc) -> usize {
        assert!(
            self.in_bounds(loc),
            "location {loc} out of bounds for {}x{} world",
            self.rows,
            self.cols
        );
        loc.row as usize * self.cols + loc.col as usize
    }

    /// The value at `loc`. Panics if out of bounds.
    #[inline]
    pub fn at(&self, loc: Loc) -> f64 {
        self.cells[self.index(loc)]
    }

    /// The value at `loc`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, loc: Loc) -> Option<f64> {
        if self.in_bounds(loc) {
            Some(self.cells[loc.row as usize * self.cols + loc.col as usize])
        } else {
            None
        }
    }

    /// Set the value at `loc`. Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, loc: Loc, value: f64) {
        let idx = self.index(loc);
        self.cells[idx] = value;
    }

    /// Whether the cell at `loc` carries the [`WALL`] marker.
    /// Panics if out of bounds.
    #[inline]
    pub fn is_wall(&self, loc: Loc) -> bool {
        self.at(loc) == WALL
    }

    /// Row-major iterator over every location in the grid.
    #[inline]
    pub fn locations(&self) -> Locations {
        Locations {
            rows: self.rows,
            cols: self.cols,
            cur: Loc::ZERO,
        }
    }

    /// Row-major iterator over `(Loc, value)` pairs.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            world: self,
            inner: self.locations(),
        }
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Row-major iterator over the locations of a [`World`].
#[derive(Clone, Debug)]
pub struct Locations {
    rows: usize,
    cols: usize,
    cur: Loc,
}

impl Iterator for Locations {
    type Item = Loc;

    #[inline]
    fn next(&mut self) -> Option<Loc> {
        if self.cur.row as usize >= self.rows || self.cols == 0 {
            return None;
        }
        let loc = self.cur;
        self.cur.col += 1;
        if self.cur.col as usize >= self.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(loc)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.row as usize >= self.rows || self.cols == 0 {
            return (0, Some(0));
        }
        let remaining_in_row = self.cols - self.cur.col as usize;
        let remaining_rows = self.rows - self.cur.row as usize - 1;
        let total = remaining_in_row + remaining_rows * self.cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for Locations {}

/// Row-major iterator over `(Loc, value)` pairs of a [`World`].
pub struct Iter<'a> {
    world: &'a World,
    inner: Locations,
}

impl Iterator for Iter<'_> {
    type Item = (Loc, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let loc = self.inner.next()?;
        Some((loc, self.world.at(loc)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a World {
    type Item = (Loc, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
