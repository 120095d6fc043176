//! Grid sizing: per-column widths, per-row heights and the window size.
//!
//! Entries are placed row-major into `max_columns` columns.  Every cell of a
//! column takes the widest declared width in that column and every cell of a
//! row the tallest declared height in that row, so cells line up even when
//! the configured sizes differ.

use dash_config::{GridConfig, Size};

/// Derived layout of the whole dashboard.  Computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    pub max_columns:   usize,
    pub rows:          usize,
    pub columns:       usize,
    pub col_widths:    Vec<u32>,
    pub row_heights:   Vec<u32>,
    pub window_width:  u32,
    pub window_height: u32,
}

impl GridGeometry {
    /// `(row, col)` of the entry at flat `index`.
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        cell_of(index, self.max_columns)
    }

    /// Extents shared by every entry placed at `(row, col)`.
    pub fn cell_size(&self, row: usize, col: usize) -> Size {
        Size::new(self.col_widths[col], self.row_heights[row])
    }
}

/// Row-major placement of flat `index` into `max_columns` columns.
pub fn cell_of(index: usize, max_columns: usize) -> (usize, usize) {
    let max_columns = max_columns.max(1);
    (index / max_columns, index % max_columns)
}

/// Size the grid for `sizes`, given in configuration order.
///
/// An empty list yields no rows or columns and a window of `2 * padding` in
/// each dimension.
pub fn calculate_grid_size(sizes: &[Size], grid: &GridConfig) -> GridGeometry {
    let max_columns = grid.max_columns.max(1);
    let count = sizes.len();

    let rows = count.div_ceil(max_columns);
    let columns = count.min(max_columns);

    let mut col_widths = vec![0u32; columns];
    let mut row_heights = vec![0u32; rows];

    for (index, size) in sizes.iter().enumerate() {
        let (row, col) = cell_of(index, max_columns);
        col_widths[col] = col_widths[col].max(size.width);
        row_heights[row] = row_heights[row].max(size.height);
    }

    let window_width = extent(&col_widths, grid.spacing, grid.padding);
    let window_height = extent(&row_heights, grid.spacing, grid.padding);

    GridGeometry {
        max_columns,
        rows,
        columns,
        col_widths,
        row_heights,
        window_width,
        window_height,
    }
}

/// Sum of `tracks` plus the gaps between them plus padding on both sides.
///
/// Saturates at `u32::MAX` instead of overflowing.
fn extent(tracks: &[u32], spacing: u32, padding: u32) -> u32 {
    let gaps = u32::try_from(tracks.len().saturating_sub(1)).unwrap_or(u32::MAX);
    tracks
        .iter()
        .fold(0u32, |acc, &t| acc.saturating_add(t))
        .saturating_add(spacing.saturating_mul(gaps))
        .saturating_add(padding.saturating_mul(2))
}
