use crate::Action;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("invalid action {0}: expected 0 (up), 1 (right), 2 (down) or 3 (left)")]
    InvalidAction(i64),
}

/// Immutable `width x height` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridTopology {
    width: usize,
    height: usize,
}

impl GridTopology {
    /// Creates a topology for a `width x height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDimension`] if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, which is also the size of the state space.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub const fn contains(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    #[must_use]
    pub const fn index_to_coords(&self, cell: usize) -> (usize, usize) {
        (cell % self.width, cell / self.width)
    }

    /// Linear index of `(x, y)`. Coordinates must already lie inside the grid.
    #[must_use]
    pub const fn coords_to_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell reached by taking `action` from `cell`, clamped to the grid on
    /// each axis independently.
    #[must_use]
    pub fn apply(&self, cell: usize, action: Action) -> usize {
        let (x, y) = self.index_to_coords(cell);
        let (x, y) = match action {
            Action::Up => (x, (y + 1).min(self.height - 1)),
            Action::Right => ((x + 1).min(self.width - 1), y),
            Action::Down => (x, y.saturating_sub(1)),
            Action::Left => (x.saturating_sub(1), y),
        };
        self.coords_to_index(x, y)
    }

    /// Number of decimal digits reserved for a cell index when packing two
    /// indices into one number: `ceil(log10(cell_count))`.
    #[must_use]
    pub fn digits(&self) -> u32 {
        let cells = self.cell_count();
        let mut digits = 0;
        let mut span: usize = 1;
        while span < cells {
            span = span.saturating_mul(10);
            digits += 1;
        }
        digits
    }
}

impl fmt::Display for GridTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
