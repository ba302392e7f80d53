use crate::constants::{GRID_GUTTER_PX, GRID_TILE_MAX_PX, GRID_TILE_MIN_PX, GRID_USABLE_RATIO};
use crate::scale::Size;
use glam::DVec2;

/// Near-square grid covering the viewport, used once the heart disperses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub tile_size: f64,
    /// Center of cell (0, 0).
    pub origin: DVec2,
}

impl GridLayout {
    /// Grid for `count` tiles in a `viewport`. `None` when there are no tiles
    /// or the viewport is empty.
    pub fn compute(count: usize, viewport: Size) -> Option<Self> {
        if count == 0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let aspect = viewport.width / viewport.height;
        let columns = ((count as f64 * aspect).sqrt().ceil() as usize).max(1);
        let rows = count.div_ceil(columns);

        let usable_width = viewport.width * GRID_USABLE_RATIO;
        let usable_height = viewport.height * GRID_USABLE_RATIO;
        let cell_width = usable_width / columns as f64;
        let cell_height = usable_height / rows as f64;
        let tile_size = (cell_width - GRID_GUTTER_PX)
            .min(cell_height - GRID_GUTTER_PX)
            .clamp(GRID_TILE_MIN_PX, GRID_TILE_MAX_PX);
        let origin = DVec2::new(
            (viewport.width - columns as f64 * cell_width) / 2.0 + cell_width / 2.0,
            (viewport.height - rows as f64 * cell_height) / 2.0 + cell_height / 2.0,
        );

        log::debug!(
            "[grid] count={} columns={} rows={} cell=({:.1},{:.1}) tile={:.1}",
            count,
            columns,
            rows,
            cell_width,
            cell_height,
            tile_size
        );

        Some(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            tile_size,
            origin,
        })
    }

    /// `(column, row)` of tile `index`, filled row-major.
    #[inline]
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Pixel center of the cell holding tile `index`.
    pub fn position(&self, index: usize) -> DVec2 {
        let (col, row) = self.cell_of(index);
        self.origin + DVec2::new(col as f64 * self.cell_width, row as f64 * self.cell_height)
    }
}
