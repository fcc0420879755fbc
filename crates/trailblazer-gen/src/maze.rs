//! Maze generation via a randomized minimum spanning tree.

use rand::Rng;
use rand::seq::SliceRandom;
use trailblazer_core::{Edge, FLOOR, Loc, WALL, World};

/// Union-find over cell indices, path-halving with union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`. Returns false if already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// Kruskal MST maze generator.
///
/// Cells form an `rows x cols` lattice; shuffling the lattice edges stands
/// in for random edge weights, and Kruskal's algorithm keeps exactly the
/// spanning edges. The result is emitted as a `(2*rows+1) x (2*cols+1)`
/// wall/floor [`World`]: cell `(r, c)` sits at world location
/// `(2r+1, 2c+1)` and each accepted edge knocks out the wall between its
/// two cells. The spanning tree guarantees every floor cell is reachable
/// from every other by cardinal floor steps.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a maze world for an `rows x cols` cell lattice.
    ///
    /// Panics if either dimension is zero.
    pub fn generate(&mut self, rows: usize, cols: usize) -> World {
        assert!(rows >= 1 && cols >= 1, "maze dimensions must be positive");

        let mut edges: Vec<Edge> = Vec::with_capacity(2 * rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let from = Loc::new(r as i32, c as i32);
                if c + 1 < cols {
                    edges.push(Edge::new(from, from.shift(0, 1)));
                }
                if r + 1 < rows {
                    edges.push(Edge::new(from, from.shift(1, 0)));
                }
            }
        }
        edges.shuffle(&mut self.rng);

        let mut world = World::new(2 * rows + 1, 2 * cols + 1, WALL);
        for r in 0..rows {
            for c in 0..cols {
                world.set(Loc::new(2 * r as i32 + 1, 2 * c as i32 + 1), FLOOR);
            }
        }

        let cell_idx = |l: Loc| l.row as usize * cols + l.col as usize;
        let mut sets = DisjointSet::new(rows * cols);
        let mut carved = 0usize;
        for e in edges {
            if sets.union(cell_idx(e.from), cell_idx(e.to)) {
                // The wall slot between the two cells' world locations.
                let between = Loc::new(e.from.row + e.to.row + 1, e.from.col + e.to.col + 1);
                world.set(between, FLOOR);
                carved += 1;
            }
        }

        log::debug!("generated {rows}x{cols} maze, {carved} corridors carved");
        world
    }
}
