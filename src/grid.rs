//! Annotation grid state.
//!
//! Tracks which cells are marked and the marker color captured for each at
//! activation time. The grid owns the session's [`MarkerColorSelector`], so
//! the rotation cursor and the cell set share a single mutation point; the
//! collaborator owns the [`RasterSampler`] and lends it to `toggle`.

use std::fmt;
use std::str::FromStr;

use crate::config::GridConfig;
use crate::constants::SENTINEL_COLOR;
use crate::marker::MarkerColorSelector;
use crate::sampler::RasterSampler;

/// Integer cell address within the grid, `0 <= x < cols`, `0 <= y < rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    /// Create a cell coordinate.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for CellCoord {
    type Err = String;

    /// Parse `"x,y"` with both parts as decimal integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y - got {:?}", s))?;
        let x = x.trim().parse().map_err(|e| format!("bad x: {}", e))?;
        let y = y.trim().parse().map_err(|e| format!("bad y: {}", e))?;
        Ok(Self { x, y })
    }
}

/// A marked cell with the marker color captured when it was activated.
///
/// The color is stored, never recomputed: a later background change or
/// selector advance does not touch existing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCell {
    pub coord: CellCoord,
    pub color: [u8; 3],
}

/// What a toggle did to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The cell is now marked with this color.
    Activated([u8; 3]),
    /// The cell's mark was removed.
    Deactivated,
}

/// Grid dimensions plus the insertion-ordered set of marked cells for one
/// annotation session.
#[derive(Debug, Clone, Default)]
pub struct AnnotationGrid {
    config: GridConfig,
    cells: Vec<ActiveCell>,
    selector: MarkerColorSelector,
    dirty: bool,
}

impl AnnotationGrid {
    /// Create an empty grid with the given (clamped) configuration.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config: config.clamped(),
            cells: Vec::new(),
            selector: MarkerColorSelector::new(),
            dirty: false,
        }
    }

    /// Current grid configuration.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Marked cells in activation order.
    pub fn active_cells(&self) -> &[ActiveCell] {
        &self.cells
    }

    /// Whether the cell is currently marked.
    pub fn is_active(&self, coord: CellCoord) -> bool {
        self.cells.iter().any(|c| c.coord == coord)
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True iff a toggle happened since the last clear, resize, or export.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flip a cell's mark.
    ///
    /// Activation samples the background through `sampler` and picks a
    /// marker color; while the sampler is not ready the sentinel color is
    /// stored directly without consulting the selector, so the rotation
    /// cursor does not advance. Coordinates beyond the grid are clamped to
    /// the last row/column.
    pub fn toggle(&mut self, coord: CellCoord, sampler: &RasterSampler) -> ToggleOutcome {
        let coord = self.clamp_coord(coord);
        self.dirty = true;

        if let Some(pos) = self.cells.iter().position(|c| c.coord == coord) {
            self.cells.remove(pos);
            log::debug!("Deactivated cell {}", coord);
            return ToggleOutcome::Deactivated;
        }

        let color = match sampler.sample(coord) {
            Some(bg) => self.selector.pick(bg),
            None => SENTINEL_COLOR,
        };
        self.cells.push(ActiveCell { coord, color });
        log::debug!("Activated cell {} with color {:?}", coord, color);
        ToggleOutcome::Activated(color)
    }

    /// Replace the grid configuration, clearing all marks and the dirty
    /// flag. The rotation cursor keeps its position for the session.
    pub fn resize(&mut self, new_config: GridConfig) {
        self.config = new_config.clamped();
        self.cells.clear();
        self.dirty = false;
        log::info!("Grid resized to {}x{}", self.config.rows, self.config.cols);
    }

    /// Remove all marks and reset the dirty flag, keeping the grid
    /// configuration. Also the post-export reset.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.dirty = false;
    }

    fn clamp_coord(&self, coord: CellCoord) -> CellCoord {
        CellCoord {
            x: coord.x.min(self.config.cols - 1),
            y: coord.y.min(self.config.rows - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_sampler(color: [u8; 3]) -> RasterSampler {
        use image::{DynamicImage, Rgb, RgbImage};
        let mut sampler = RasterSampler::new(320, 180);
        sampler.set_raster(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            32,
            32,
            Rgb(color),
        )));
        sampler
    }

    #[test]
    fn test_double_toggle_restores_cell_but_dirty_sticks() {
        let mut grid = AnnotationGrid::new(GridConfig::default());
        let sampler = ready_sampler([0, 0, 0]);
        let coord = CellCoord::new(5, 5);

        assert!(matches!(
            grid.toggle(coord, &sampler),
            ToggleOutcome::Activated(_)
        ));
        assert!(grid.is_active(coord));
        assert!(grid.is_dirty());

        assert_eq!(grid.toggle(coord, &sampler), ToggleOutcome::Deactivated);
        assert!(!grid.is_active(coord));
        assert!(grid.is_empty());
        assert!(grid.is_dirty());
    }

    #[test]
    fn test_not_ready_sampler_stores_sentinel_without_cursor_advance() {
        let mut grid = AnnotationGrid::new(GridConfig::default());
        let sampler = RasterSampler::new(320, 180);

        let outcome = grid.toggle(CellCoord::new(3, 4), &sampler);
        assert_eq!(outcome, ToggleOutcome::Activated(SENTINEL_COLOR));
        assert_eq!(grid.selector.cursor(), 0);
    }

    #[test]
    fn test_marker_color_is_captured_not_recomputed() {
        let mut grid = AnnotationGrid::new(GridConfig::default());
        let coord = CellCoord::new(1, 1);

        let black = ready_sampler([0, 0, 0]);
        let ToggleOutcome::Activated(color) = grid.toggle(coord, &black) else {
            panic!("expected activation");
        };

        // Later marks on a different background must not touch the stored color.
        let white = ready_sampler([255, 255, 255]);
        grid.toggle(CellCoord::new(2, 2), &white);
        assert_eq!(grid.active_cells()[0].color, color);
    }

    #[test]
    fn test_resize_clears_cells_and_dirty_flag() {
        let mut grid = AnnotationGrid::new(GridConfig::default());
        let sampler = ready_sampler([40, 40, 40]);
        grid.toggle(CellCoord::new(0, 0), &sampler);
        grid.toggle(CellCoord::new(1, 0), &sampler);

        grid.resize(GridConfig::new(90, 160));
        assert!(grid.is_empty());
        assert!(!grid.is_dirty());
        assert_eq!(grid.config(), GridConfig::new(90, 160));
    }

    #[test]
    fn test_clear_keeps_config() {
        let mut grid = AnnotationGrid::new(GridConfig::new(10, 20));
        let sampler = ready_sampler([40, 40, 40]);
        grid.toggle(CellCoord::new(0, 0), &sampler);

        grid.clear();
        assert!(grid.is_empty());
        assert!(!grid.is_dirty());
        assert_eq!(grid.config(), GridConfig::new(10, 20));
    }

    #[test]
    fn test_cells_keep_insertion_order() {
        let mut grid = AnnotationGrid::new(GridConfig::default());
        let sampler = ready_sampler([40, 40, 40]);
        let coords = [
            CellCoord::new(7, 2),
            CellCoord::new(0, 0),
            CellCoord::new(3, 9),
        ];
        for c in coords {
            grid.toggle(c, &sampler);
        }
        let stored: Vec<CellCoord> = grid.active_cells().iter().map(|c| c.coord).collect();
        assert_eq!(stored, coords);
    }

    #[test]
    fn test_out_of_range_coord_is_clamped() {
        let mut grid = AnnotationGrid::new(GridConfig::new(10, 10));
        let sampler = ready_sampler([40, 40, 40]);
        grid.toggle(CellCoord::new(99, 99), &sampler);
        assert!(grid.is_active(CellCoord::new(9, 9)));
    }

    #[test]
    fn test_cell_coord_parses_from_str() {
        assert_eq!("5,7".parse::<CellCoord>().unwrap(), CellCoord::new(5, 7));
        assert_eq!(" 12 , 3 ".parse::<CellCoord>().unwrap(), CellCoord::new(12, 3));
        assert!("5".parse::<CellCoord>().is_err());
        assert!("a,b".parse::<CellCoord>().is_err());
    }
}
