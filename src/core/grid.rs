//! The board grid and its pure transforms.
//!
//! ## Representation
//!
//! An N×N board stored row-major in a flat `Vec<u32>`. Cells are 0 (empty)
//! or a power of two ≥ 2. N is fixed per grid but configurable at creation;
//! the shift algorithm never assumes N=4.
//!
//! ## Shift algorithm
//!
//! All four directions reduce to a single leftward row transform via two
//! orthogonal normalizations:
//!
//! 1. Up/Down transpose the grid, turning columns into rows.
//! 2. Right/Down reverse each row before and after the transform.
//!
//! The row transform itself is compress → merge → compress:
//!
//! - [`compress_row`]: left-pack non-zero cells, zero-fill the tail.
//! - [`merge_row`]: one left-to-right pass collapsing adjacent equal pairs
//!   into the left cell at double value. Zeroing the right cell breaks
//!   chains, so each cell merges at most once per pass.
//!
//! A row counts as "moved" if any of the three steps altered it; the grid
//! `moved` flag is the OR over all rows.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;

/// Per-row scratch buffer. Rows are length N (N=4 typical), so compaction
/// stays off the heap in the common case.
type RowBuf = SmallVec<[u32; 4]>;

/// An N×N board of tile values, row-major, zero-indexed `(row, col)`.
///
/// The grid is owned by the engine; callers work with cloned snapshots and
/// must treat them as read-only views of the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty grid of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2` (a 1×1 board has no legal move).
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Grid size must be at least 2");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from explicit rows. Intended for tests and scripted
    /// setups.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square of side ≥ 2.
    #[must_use]
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let size = rows.len();
        assert!(size >= 2, "Grid size must be at least 2");
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "Rows must form a square grid");
            cells.extend_from_slice(row);
        }
        Self { size, cells }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Set the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    /// View a single row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    fn row_mut(&mut self, row: usize) -> &mut [u32] {
        &mut self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.size)
    }

    /// Coordinates of all empty cells, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Whether the grid has no empty cell.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile value on the board (0 for an empty grid).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether any cell holds exactly `value`.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    /// Whether any two 4-adjacent cells (sharing a horizontal or vertical
    /// edge) hold equal values.
    #[must_use]
    pub fn has_adjacent_equal(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let v = self.get(row, col);
                if col + 1 < self.size && v == self.get(row, col + 1) {
                    return true;
                }
                if row + 1 < self.size && v == self.get(row + 1, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Return the transposed grid (rows become columns).
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut out = Self::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.set(col, row, self.get(row, col));
            }
        }
        out
    }

    /// Apply a directional shift, returning the shifted grid and whether
    /// anything moved.
    ///
    /// Pure with respect to `self`: the receiver is never mutated. A result
    /// with `moved == false` is cell-for-cell identical to the input.
    #[must_use]
    pub fn shifted(&self, direction: Direction) -> (Self, bool) {
        let mut work = if direction.is_vertical() {
            self.transposed()
        } else {
            self.clone()
        };

        let reverse = direction.is_reversed();
        let mut moved = false;
        for r in 0..work.size {
            let row = work.row_mut(r);
            if reverse {
                row.reverse();
            }
            moved |= shift_row(row);
            if reverse {
                row.reverse();
            }
        }

        let out = if direction.is_vertical() {
            work.transposed()
        } else {
            work
        };
        (out, moved)
    }
}

impl std::fmt::Display for Grid {
    /// Render the grid as an ASCII board, one cell per position, empty
    /// cells blank.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "+------".repeat(self.size) + "+";
        writeln!(f, "{rule}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for &v in row {
                if v == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{v:^6}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Left-pack the non-zero cells of a row, preserving their relative order,
/// and zero-fill the remainder.
///
/// Returns whether the row changed. Idempotent: compressing a compressed
/// row is a no-op.
pub fn compress_row(row: &mut [u32]) -> bool {
    let packed: RowBuf = row.iter().copied().filter(|&v| v != 0).collect();
    let changed = row[..packed.len()] != packed[..];
    if changed {
        row[..packed.len()].copy_from_slice(&packed);
        row[packed.len()..].fill(0);
    }
    changed
}

/// One left-to-right merge pass: adjacent equal non-zero cells collapse
/// into the left cell at double value, the right cell becomes 0.
///
/// Zeroing the right cell means a freshly merged cell never matches its
/// next neighbor in the same pass, so each cell merges at most once.
/// Returns whether any merge occurred.
pub fn merge_row(row: &mut [u32]) -> bool {
    let mut merged = false;
    for i in 0..row.len().saturating_sub(1) {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            merged = true;
        }
    }
    merged
}

/// Full leftward row transform: compress, merge, compress again to close
/// the gaps merging left behind. Returns whether any step altered the row.
pub fn shift_row(row: &mut [u32]) -> bool {
    let compressed = compress_row(row);
    let merged = merge_row(row);
    let closed = compress_row(row);
    compressed || merged || closed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_simple() {
        let mut row = [0, 2, 0, 4];
        assert!(compress_row(&mut row));
        assert_eq!(row, [2, 4, 0, 0]);
    }

    #[test]
    fn test_compress_already_packed() {
        let mut row = [2, 4, 8, 16];
        assert!(!compress_row(&mut row));
        assert_eq!(row, [2, 4, 8, 16]);
    }

    #[test]
    fn test_compress_all_zeros() {
        let mut row = [0, 0, 0, 0];
        assert!(!compress_row(&mut row));
        assert_eq!(row, [0, 0, 0, 0]);
    }

    #[test]
    fn test_compress_idempotent() {
        let mut row = [0, 4, 0, 4];
        compress_row(&mut row);
        let once = row;
        assert!(!compress_row(&mut row));
        assert_eq!(row, once);
    }

    #[test]
    fn test_merge_simple() {
        let mut row = [2, 2, 0, 0];
        assert!(merge_row(&mut row));
        assert_eq!(row, [4, 0, 0, 0]);
    }

    #[test]
    fn test_merge_no_double_merge() {
        // [4, 2, 2, 0] merges to [4, 4, 0, 0], never [8, 0, 0, 0]
        let mut row = [4, 2, 2, 0];
        assert!(merge_row(&mut row));
        assert_eq!(row, [4, 4, 0, 0]);
    }

    #[test]
    fn test_merge_chain_of_four() {
        // Each cell participates in at most one merge per pass
        let mut row = [2, 2, 2, 2];
        assert!(merge_row(&mut row));
        assert_eq!(row, [4, 0, 4, 0]);
    }

    #[test]
    fn test_merge_requires_adjacency() {
        // Merge runs on the compressed row; a gap blocks it here
        let mut row = [2, 0, 2, 0];
        assert!(!merge_row(&mut row));
        assert_eq!(row, [2, 0, 2, 0]);
    }

    #[test]
    fn test_shift_row_merges_across_gaps() {
        let mut row = [2, 0, 2, 0];
        assert!(shift_row(&mut row));
        assert_eq!(row, [4, 0, 0, 0]);
    }

    #[test]
    fn test_shift_row_two_pairs() {
        let mut row = [2, 2, 4, 4];
        assert!(shift_row(&mut row));
        assert_eq!(row, [4, 8, 0, 0]);
    }

    #[test]
    fn test_shift_row_unchanged() {
        let mut row = [2, 4, 8, 16];
        assert!(!shift_row(&mut row));
        assert_eq!(row, [2, 4, 8, 16]);
    }

    #[test]
    fn test_shifted_left() {
        let grid = Grid::from_rows(&[
            [2, 2, 0, 0],
            [0, 4, 4, 0],
            [2, 0, 2, 0],
            [8, 8, 8, 8],
        ]);
        let (next, moved) = grid.shifted(Direction::Left);
        assert!(moved);
        assert_eq!(
            next,
            Grid::from_rows(&[
                [4, 0, 0, 0],
                [8, 0, 0, 0],
                [4, 0, 0, 0],
                [16, 16, 0, 0],
            ])
        );
    }

    #[test]
    fn test_shifted_right() {
        let grid = Grid::from_rows(&[
            [2, 2, 0, 0],
            [0, 4, 4, 0],
            [2, 0, 2, 0],
            [8, 8, 8, 8],
        ]);
        let (next, moved) = grid.shifted(Direction::Right);
        assert!(moved);
        assert_eq!(
            next,
            Grid::from_rows(&[
                [0, 0, 0, 4],
                [0, 0, 0, 8],
                [0, 0, 0, 4],
                [0, 0, 16, 16],
            ])
        );
    }

    #[test]
    fn test_shifted_up() {
        let grid = Grid::from_rows(&[
            [2, 0, 2, 8],
            [2, 4, 0, 8],
            [0, 4, 2, 8],
            [0, 0, 0, 8],
        ]);
        let (next, moved) = grid.shifted(Direction::Up);
        assert!(moved);
        assert_eq!(
            next,
            Grid::from_rows(&[
                [4, 8, 4, 16],
                [0, 0, 0, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_shifted_down() {
        let grid = Grid::from_rows(&[
            [2, 0, 2, 8],
            [2, 4, 0, 8],
            [0, 4, 2, 8],
            [0, 0, 0, 8],
        ]);
        let (next, moved) = grid.shifted(Direction::Down);
        assert!(moved);
        assert_eq!(
            next,
            Grid::from_rows(&[
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 16],
                [4, 8, 4, 16],
            ])
        );
    }

    #[test]
    fn test_shifted_no_move_is_identical() {
        let grid = Grid::from_rows(&[
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [8, 0, 0, 0],
            [16, 0, 0, 0],
        ]);
        let (next, moved) = grid.shifted(Direction::Left);
        assert!(!moved);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_transpose_involution() {
        let grid = Grid::from_rows(&[
            [2, 4, 0, 0],
            [0, 8, 0, 2],
            [0, 0, 16, 0],
            [2, 0, 0, 32],
        ]);
        assert_eq!(grid.transposed().transposed(), grid);
    }

    #[test]
    fn test_generalizes_beyond_four() {
        let grid = Grid::from_rows(&[
            [2, 2, 2, 2, 2],
            [0; 5],
            [0; 5],
            [0; 5],
            [0; 5],
        ]);
        let (next, moved) = grid.shifted(Direction::Left);
        assert!(moved);
        assert_eq!(next.row(0), &[4, 4, 2, 0, 0]);
    }

    #[test]
    fn test_adjacency_check() {
        let locked = Grid::from_rows(&[
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!locked.has_adjacent_equal());
        assert!(locked.is_full());

        let mut mergeable = locked.clone();
        mergeable.set(0, 0, 4);
        assert!(mergeable.has_adjacent_equal());
    }

    #[test]
    fn test_empty_cells() {
        let mut grid = Grid::new(4);
        assert_eq!(grid.empty_cells().len(), 16);
        grid.set(1, 2, 4);
        let empties = grid.empty_cells();
        assert_eq!(empties.len(), 15);
        assert!(!empties.contains(&(1, 2)));
    }

    #[test]
    fn test_display_format() {
        let grid = Grid::from_rows(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let rendered = format!("{grid}");
        assert!(rendered.contains("  2   "));
        assert!(rendered.contains("+------+"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let grid = Grid::from_rows(&[[2, 0, 4, 0], [0; 4], [0; 4], [0, 0, 0, 8]]);
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    #[should_panic(expected = "Grid size must be at least 2")]
    fn test_rejects_tiny_grid() {
        let _ = Grid::new(1);
    }
}
