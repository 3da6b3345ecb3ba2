//! Fixed Polyomino Enumerator Library
//!
//! Enumerates all distinct fixed polyominoes (connected shapes of unit
//! squares, distinct up to translation only) for square counts 1 through 7,
//! and renders each shape as ASCII art.

pub mod generate;
pub mod grid;
pub mod shape;

pub use generate::{generate, report, SquareCountError, MAX_SQUARES, MIN_SQUARES};
pub use grid::{BitGrid, Point, Vect};
pub use shape::{Direction, Shape};
