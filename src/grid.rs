//! Toroidal bit-grid used to track occupied squares during shape growth.
//!
//! The grid is 8x8 booleans packed into a single `u64`, addressed modulo 8
//! on both axes so coordinates wrap instead of failing. Packing is
//! row-major with row 0 in the most significant byte and x = 0 in the most
//! significant bit of each row, so comparing two grids is a single unsigned
//! integer comparison.

/// An integer cell coordinate. May be negative; grid operations reduce it
/// modulo 8 per axis.
pub type Point = (i32, i32);

/// An integer translation vector.
pub type Vect = (i32, i32);

/// An 8x8 membership grid packed into a `u64`, with wrap-around addressing.
///
/// The derived ordering is the unsigned ordering of the packed word, which
/// gives a total, deterministic order over all possible grids.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitGrid(u64);

/// Returns the single-bit mask for a (wrapped) cell coordinate.
#[inline(always)]
fn bit((x, y): Point) -> u64 {
    let x = x.rem_euclid(8) as u32;
    let y = y.rem_euclid(8) as u32;
    1u64 << ((7 - y) * 8 + (7 - x))
}

impl BitGrid {
    /// Creates an empty grid.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Marks the cell at `p` occupied. Idempotent; `p` wraps modulo 8.
    #[inline]
    pub fn set(&mut self, p: Point) {
        self.0 |= bit(p);
    }

    /// Returns whether the cell at `p` (wrapped modulo 8) is occupied.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        self.0 & bit(p) != 0
    }

    /// Returns the number of occupied cells.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Moves every occupied cell by `(dx, dy)`, wrapping around both axes
    /// independently.
    ///
    /// The whole bit pattern shifts as a unit: each row rotates by `dx`
    /// within its byte lane, then the word rotates by whole rows for `dy`.
    /// Any integer vector is accepted; the effective shift is modulo 8 per
    /// axis.
    pub fn translate(&mut self, (dx, dy): Vect) {
        let shift_x = dx.rem_euclid(8) as u32;
        let shift_y = 8 * dy.rem_euclid(8) as u32;

        let mut rows = self.0.to_be_bytes();
        for row in &mut rows {
            *row = row.rotate_right(shift_x);
        }
        self.0 = u64::from_be_bytes(rows).rotate_right(shift_y);
    }
}
