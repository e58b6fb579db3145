pub mod cell;
pub mod grid;

use std::{fmt, io::Write, sync::mpsc::Sender};

use crossterm::{cursor, queue, terminal};

pub use cell::{Cell, Wormhole};
pub use grid::GridEvent;
use grid::Grid;

use crate::error::MazeError;

/// A grid position as `(x, y)`: column first, then row.
pub type Coord = (u16, u16);

/// A rectangular grid of cells that carving and painting operate on.
///
/// Every position starts out as [`Cell::Wall`]. The outermost ring is never legal for
/// carving, which leaves it free for a [`Cell::HardWall`] frame.
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a wall-filled maze. Both dimensions must be positive.
    ///
    /// Odd dimensions leave a wall row and column between the carved cells and the border.
    /// With even dimensions the last even row or column is still legal, so passages run
    /// right up against the border.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        Self::build(width, height, None)
    }

    /// Like [`Maze::new`], but reports every cell change on `sender`.
    pub fn with_events(
        width: u16,
        height: u16,
        sender: Sender<GridEvent>,
    ) -> Result<Self, MazeError> {
        Self::build(width, height, Some(sender))
    }

    fn build(
        width: u16,
        height: u16,
        sender: Option<Sender<GridEvent>>,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyDimensions { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, Cell::Wall, sender),
        })
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        self.grid.data()
    }

    /// Number of positions holding `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells().iter().filter(|&&c| c == kind).count()
    }

    /// Refills the whole maze with walls.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Wall);
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width() && coord.1 < self.height()
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.grid[coord]
    }

    /// # Panics
    /// If `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, kind: Cell) {
        self.grid.set(coord, kind);
    }

    /// Paints every listed coordinate with `kind`. An empty list is a no-op.
    ///
    /// # Panics
    /// If any coordinate is out of bounds. Callers supply in-bounds coordinates.
    pub fn set_many(&mut self, coords: &[Coord], kind: Cell) {
        if coords.is_empty() {
            return;
        }
        tracing::debug!("[paint] Setting {} cells: {:?}", kind.name(), coords);
        coords.iter().for_each(|&coord| self.set(coord, kind));
    }

    /// Paints the half-open rectangle `[x0, x1) x [y0, y1)` with `kind`.
    ///
    /// # Errors
    /// [`MazeError::InvalidRange`] if `x0 >= x1` or `y0 >= y1`. Nothing is painted.
    ///
    /// # Panics
    /// If the rectangle reaches past the maze. Checked before any cell is written.
    pub fn fill_rect(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        kind: Cell,
    ) -> Result<(), MazeError> {
        if x0 >= x1 || y0 >= y1 {
            return Err(MazeError::InvalidRange { x0, y0, x1, y1 });
        }
        if x1 > self.width() || y1 > self.height() {
            panic!("The range ({}, {})..({}, {}) is out of bounds", x0, y0, x1, y1);
        }
        tracing::debug!(
            "[paint] Setting range {} cells: ({}, {})..({}, {})",
            kind.name(),
            x0,
            y0,
            x1,
            y1
        );
        rect_points(x0, y0, x1, y1)
            .into_iter()
            .for_each(|coord| self.set(coord, kind));
        Ok(())
    }

    /// Sets the outermost ring of the maze to [`Cell::HardWall`].
    pub fn draw_hardwall_border(&mut self) {
        (0..self.height()).for_each(|y| {
            (0..self.width()).for_each(|x| {
                if self.grid.is_boundary(x, y) {
                    self.set((x, y), Cell::HardWall);
                }
            })
        });
    }

    /// A coordinate is legal when it lies strictly inside the one-cell border margin.
    pub fn is_legal(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        (0 < x && x < self.width() - 1) && (0 < y && y < self.height() - 1)
    }

    /// Only untouched walls can be dug. Anything else, carved or painted, stays put.
    pub fn is_diggable(&self, coord: Coord) -> bool {
        matches!(self[coord], Cell::Wall)
    }

    /// Cells two steps away in the cardinal directions that are legal and still diggable.
    ///
    /// The skipped cell in between becomes the connector when carving, which keeps
    /// corridors one cell wide and never joins two carved regions twice.
    pub fn candidate_neighbors(&self, coord: Coord) -> Vec<Coord> {
        let (x, y) = coord;
        [
            // NOTE: Underflow wraps to the top of the u16 range and overflow saturates to
            // u16::MAX, both of which fail the legality check since width - 1 < u16::MAX.
            (x.wrapping_sub(2), y),
            (x.saturating_add(2), y),
            (x, y.wrapping_sub(2)),
            (x, y.saturating_add(2)),
        ]
        .into_iter()
        .filter(|&c| self.is_legal(c) && self.is_diggable(c))
        .collect()
    }

    /// Marks `to` and the cell between `from` and `to` as passage. `from` is left as is.
    ///
    /// # Errors
    /// [`MazeError::InvalidPath`] unless `to` is exactly two steps from `from` along one axis.
    pub fn connect(&mut self, from: Coord, to: Coord) -> Result<(), MazeError> {
        let dx = to.0 as i32 - from.0 as i32;
        let dy = to.1 as i32 - from.1 as i32;
        if !matches!((dx.abs(), dy.abs()), (2, 0) | (0, 2)) {
            return Err(MazeError::InvalidPath { from, to });
        }
        if !self.is_in_bounds(to) {
            panic!("Cannot carve to {:?}, it is out of bounds", to);
        }
        let between = (
            (from.0 as i32 + dx / 2) as u16,
            (from.1 as i32 + dy / 2) as u16,
        );
        self.set(between, Cell::Passage);
        self.set(to, Cell::Passage);
        Ok(())
    }

    /// Integer codes of every cell, one inner vector per row.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.cells()
            .chunks(self.width() as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Writes the maze as coloured glyphs, one line per row.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        for row in self.cells().chunks(self.width() as usize) {
            for cell in row {
                write!(out, "{}", cell)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

/// Plain text dump: each cell as its code in hex, one line per row.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells().chunks(self.width() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{:x}", cell.code())?;
            }
        }
        Ok(())
    }
}

/// All coordinates of the half-open rectangle `[x0, x1) x [y0, y1)`, column by column.
pub fn rect_points(x0: u16, y0: u16, x1: u16, y1: u16) -> Vec<Coord> {
    (x0..x1)
        .flat_map(|x| (y0..y1).map(move |y| (x, y)))
        .collect()
}
