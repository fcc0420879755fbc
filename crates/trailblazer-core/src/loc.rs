//! Grid coordinates: [`Loc`] and [`Edge`].

use std::fmt;

// ---------------------------------------------------------------------------
// Loc
// ---------------------------------------------------------------------------

/// A 2D grid location. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a location shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Loc; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// All eight neighbours (cardinal + diagonal).
    #[inline]
    pub fn neighbors_8(self) -> [Loc; 8] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row - 1, self.col + 1),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row + 1, self.col - 1),
            Self::new(self.row, self.col - 1),
            Self::new(self.row - 1, self.col - 1),
        ]
    }

    /// Whether `other` is grid-adjacent to `self` (8-way) or identical.
    #[inline]
    pub fn is_adjacent(self, other: Loc) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

// --- trait impls for Loc ---

impl PartialOrd for Loc {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Loc {
    /// Row-major total order: compare row first, then column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed edge between two grid locations.
///
/// Used when describing graph structure (maze connectivity); the search
/// engine itself never touches edges on its hot path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: Loc,
    pub to: Loc,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    pub const fn new(from: Loc, to: Loc) -> Self {
        Self { from, to }
    }

    /// The same edge with endpoints swapped.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn loc_round_trip() {
        let l = Loc::new(3, 7);
        let json = serde_json::to_string(&l).unwrap();
        let back: Loc = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }

    #[test]
    fn edge_round_trip() {
        let e = Edge::new(Loc::new(1, 2), Loc::new(2, 2));
        let json = serde_json::to_string(&e).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
