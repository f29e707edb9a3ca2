use serde::Serialize;

/// Fixed-size matrix of optional tokens. Out-of-range coordinates are never
/// an error: callers routinely probe one cell past the edge during drop and
/// collision checks, so invalid reads come back empty and invalid writes are
/// no-ops.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major: cells[y * width + x].
    cells: Vec<Option<String>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Valid and unoccupied.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.is_valid(x, y) && self.cells[y * self.width + x].is_none()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        if !self.is_valid(x, y) {
            return None;
        }
        self.cells[y * self.width + x].as_deref()
    }

    /// Sets or clears a single cell; no-op if the coordinate is invalid.
    pub fn set(&mut self, x: usize, y: usize, token: Option<String>) {
        if self.is_valid(x, y) {
            self.cells[y * self.width + x] = token;
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.is_valid(0, y) && (0..self.width).all(|x| !self.is_empty(x, y))
    }

    /// Pull every occupied cell down to fill emptied space below it, per
    /// column, processed bottom-up. Idempotent.
    pub fn apply_gravity(&mut self) {
        for x in 0..self.width {
            for y in (0..self.height).rev() {
                if !self.is_empty(x, y) {
                    continue;
                }
                // Nearest occupied cell above falls into this one.
                for k in (0..y).rev() {
                    if let Some(token) = self.get(x, k).map(str::to_string) {
                        self.set(x, y, Some(token));
                        self.set(x, k, None);
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(6, 10);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 10);
        for y in 0..10 {
            for x in 0..6 {
                assert!(grid.is_empty(x, y));
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(6, 10);
        grid.set(2, 3, Some("あ".to_string()));
        assert_eq!(grid.get(2, 3), Some("あ"));
        assert!(!grid.is_empty(2, 3));

        grid.set(2, 3, None);
        assert_eq!(grid.get(2, 3), None);
        assert!(grid.is_empty(2, 3));
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        let mut grid = Grid::new(6, 10);
        assert!(!grid.is_valid(6, 0));
        assert!(!grid.is_valid(0, 10));
        assert!(!grid.is_empty(6, 0));
        assert_eq!(grid.get(99, 99), None);
        // Invalid write must not panic or touch any cell.
        grid.set(6, 0, Some("あ".to_string()));
        for y in 0..10 {
            for x in 0..6 {
                assert!(grid.is_empty(x, y));
            }
        }
    }

    #[test]
    fn test_is_row_full() {
        let mut grid = Grid::new(3, 2);
        assert!(!grid.is_row_full(0));
        for x in 0..3 {
            grid.set(x, 1, Some("ん".to_string()));
        }
        assert!(grid.is_row_full(1));
        assert!(!grid.is_row_full(2)); // out of range
    }

    #[test]
    fn test_gravity_compacts_columns() {
        let mut grid = Grid::new(3, 4);
        grid.set(0, 0, Some("あ".to_string()));
        grid.set(0, 2, Some("め".to_string()));
        grid.apply_gravity();

        assert_eq!(grid.get(0, 3), Some("め"));
        assert_eq!(grid.get(0, 2), Some("あ"));
        assert!(grid.is_empty(0, 0));
        assert!(grid.is_empty(0, 1));
    }

    #[test]
    fn test_gravity_is_idempotent() {
        let mut grid = Grid::new(3, 4);
        grid.set(1, 0, Some("か".to_string()));
        grid.set(1, 2, Some("わ".to_string()));
        grid.set(2, 1, Some("め".to_string()));

        grid.apply_gravity();
        let once = grid.clone();
        grid.apply_gravity();

        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y), once.get(x, y));
            }
        }
    }
}
