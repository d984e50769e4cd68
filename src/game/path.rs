//! Connection rules for matching a pair of tiles.
//!
//! Two tiles can be cleared together when a horizontal/vertical polyline with
//! at most two bends joins them without crossing any remaining tile. The
//! border ring of the grid is always empty, so paths may run around the
//! outside of the board.

use crate::game::board::{Grid, Pos};

/// Waypoints of a successful connection, in grid coordinates: the two
/// endpoints plus zero, one, or two corner cells in traversal order.
pub type Path = Vec<Pos>;

/// Which coordinate a two-bend search sweeps for the middle segment.
#[derive(Clone, Copy)]
enum Axis {
    Col,
    Row,
}

/// Decide whether `a` and `b` can be connected, and if so return the path.
///
/// Checks progressively longer shapes and returns the first that fits:
/// straight line, one bend (both orientations), then two bends searched to
/// the right of `a`, to the left, below, and above. The first clear route in
/// that order determines the drawn path; connectability itself does not
/// depend on the order.
///
/// Both positions must be on the grid and distinct; tile-kind equality is
/// the caller's responsibility.
pub fn can_connect(grid: &Grid, a: Pos, b: Pos) -> Option<Path> {
    assert!(
        grid.in_bounds(a) && grid.in_bounds(b),
        "connection endpoints out of bounds: {a:?}, {b:?}"
    );
    assert_ne!(a, b, "cannot connect a cell to itself");

    // Straight line, same column
    if a.col == b.col && (a.row.abs_diff(b.row) == 1 || col_clear(grid, a.col, a.row, b.row)) {
        return Some(vec![a, b]);
    }

    // Straight line, same row
    if a.row == b.row && (a.col.abs_diff(b.col) == 1 || row_clear(grid, a.row, a.col, b.col)) {
        return Some(vec![a, b]);
    }

    // One bend, horizontal then vertical, turning at (a.row, b.col)
    if row_clear(grid, a.row, a.col, b.col)
        && grid.is_empty_at(a.row, b.col)
        && col_clear(grid, b.col, a.row, b.row)
    {
        return Some(vec![a, Pos::new(a.row, b.col), b]);
    }

    // One bend, vertical then horizontal, turning at (b.row, a.col)
    if col_clear(grid, a.col, a.row, b.row)
        && grid.is_empty_at(b.row, a.col)
        && row_clear(grid, b.row, a.col, b.col)
    {
        return Some(vec![a, Pos::new(b.row, a.col), b]);
    }

    // Two bends: sweep candidate turning lines right of `a`, then left,
    // then below, then above; first clear route wins.
    scan_two_bend(grid, a, b, Axis::Col, true)
        .or_else(|| scan_two_bend(grid, a, b, Axis::Col, false))
        .or_else(|| scan_two_bend(grid, a, b, Axis::Row, true))
        .or_else(|| scan_two_bend(grid, a, b, Axis::Row, false))
}

/// Sweep candidate turning lines along `axis`, outward from `a`, ascending
/// or descending. For a column sweep the path turns at (a.row, k) and
/// (b.row, k); a row sweep is the mirror image.
fn scan_two_bend(grid: &Grid, a: Pos, b: Pos, axis: Axis, ascending: bool) -> Option<Path> {
    let (start, skip, limit) = match axis {
        Axis::Col => (a.col, b.col, grid.cols()),
        Axis::Row => (a.row, b.row, grid.rows()),
    };

    let step: isize = if ascending { 1 } else { -1 };
    let mut k = start as isize + step;
    while k >= 0 && (k as usize) < limit {
        let line = k as usize;
        if line != skip && two_bend_via(grid, a, b, axis, line) {
            let (corner1, corner2) = match axis {
                Axis::Col => (Pos::new(a.row, line), Pos::new(b.row, line)),
                Axis::Row => (Pos::new(line, a.col), Pos::new(line, b.col)),
            };
            return Some(vec![a, corner1, corner2, b]);
        }
        k += step;
    }
    None
}

/// Whether the three-segment route through turning line `k` is clear: the
/// run from `a` to the line, the middle run along the line, the run from the
/// line to `b`, and both turning cells themselves.
fn two_bend_via(grid: &Grid, a: Pos, b: Pos, axis: Axis, k: usize) -> bool {
    match axis {
        Axis::Col => {
            row_clear(grid, a.row, a.col, k)
                && col_clear(grid, k, a.row, b.row)
                && row_clear(grid, b.row, k, b.col)
                && grid.is_empty_at(a.row, k)
                && grid.is_empty_at(b.row, k)
        }
        Axis::Row => {
            col_clear(grid, a.col, a.row, k)
                && row_clear(grid, k, a.col, b.col)
                && col_clear(grid, b.col, k, b.row)
                && grid.is_empty_at(k, a.col)
                && grid.is_empty_at(k, b.col)
        }
    }
}

/// Whether every cell strictly between two columns of `row` is empty.
/// Adjacent or equal columns have no cells in between and are trivially clear.
fn row_clear(grid: &Grid, row: usize, from_col: usize, to_col: usize) -> bool {
    let (lo, hi) = (from_col.min(to_col), from_col.max(to_col));
    (lo + 1..hi).all(|col| grid.is_empty_at(row, col))
}

/// Whether every cell strictly between two rows of `col` is empty.
fn col_clear(grid: &Grid, col: usize, from_row: usize, to_row: usize) -> bool {
    let (lo, hi) = (from_row.min(to_row), from_row.max(to_row));
    (lo + 1..hi).all(|row| grid.is_empty_at(row, col))
}
