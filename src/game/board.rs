use rand::Rng;

use crate::constants::{GRID_COLS, GRID_ROWS, INTERIOR_SLOTS, TILE_KINDS};

/// Identifier of a tile face. Only compared for equality.
pub type TileKind = u8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Tile(TileKind),
}

/// A grid coordinate, row 0 at the top, column 0 on the left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The game board. The outermost ring of cells is always empty and is never
/// dealt a tile; connection paths may pass through it.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    cells: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Deal a fresh board: every kind appears an even number of times, so the
    /// interior can always be fully paired off.
    ///
    /// The pool starts with one pair of every kind, then random kinds are
    /// added in pairs until all interior slots are covered. The pool is
    /// shuffled and dealt row-major into the interior.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();

        let mut pool: Vec<TileKind> = Vec::with_capacity(INTERIOR_SLOTS);
        for kind in 0..TILE_KINDS {
            pool.push(kind);
            pool.push(kind);
        }
        while pool.len() + 1 < INTERIOR_SLOTS {
            let kind = rng.gen_range(0..TILE_KINDS);
            pool.push(kind);
            pool.push(kind);
        }

        fisher_yates(&mut pool, &mut rng);

        let mut grid = Self::empty();
        let mut deal = pool.into_iter();
        for row in 1..GRID_ROWS - 1 {
            for col in 1..GRID_COLS - 1 {
                if let Some(kind) = deal.next() {
                    grid.cells[row][col] = Cell::Tile(kind);
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < GRID_ROWS && pos.col < GRID_COLS
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.is_empty_at(pos.row, pos.col)
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    pub fn kind_at(&self, pos: Pos) -> Option<TileKind> {
        match self.get(pos) {
            Cell::Tile(kind) => Some(kind),
            Cell::Empty => None,
        }
    }

    /// Remove the tile at `pos`. Clearing is one-way; nothing ever puts a
    /// tile back on a cleared cell within a level.
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row][pos.col] = Cell::Empty;
    }

    /// Place a cell directly, for building fixture boards.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// All playable positions, border excluded.
    pub fn interior_positions(&self) -> impl Iterator<Item = Pos> {
        (1..GRID_ROWS - 1).flat_map(|row| (1..GRID_COLS - 1).map(move |col| Pos::new(row, col)))
    }

    /// Number of tiles still on the board.
    pub fn remaining(&self) -> usize {
        self.interior_positions()
            .filter(|&pos| !self.is_empty(pos))
            .count()
    }

    /// Whether every tile has been cleared (the level is complete).
    pub fn is_cleared(&self) -> bool {
        self.remaining() == 0
    }

    /// Redistribute the kinds of the remaining tiles among their current
    /// positions. The set of occupied cells does not change.
    pub fn reshuffle(&mut self) {
        let positions: Vec<Pos> = self
            .interior_positions()
            .filter(|&pos| !self.is_empty(pos))
            .collect();
        let mut kinds: Vec<TileKind> = positions
            .iter()
            .filter_map(|&pos| self.kind_at(pos))
            .collect();

        let mut rng = rand::thread_rng();
        fisher_yates(&mut kinds, &mut rng);

        for (pos, kind) in positions.into_iter().zip(kinds) {
            self.cells[pos.row][pos.col] = Cell::Tile(kind);
        }
    }
}

fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
