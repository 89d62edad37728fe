pub const DEFAULT_DIMS: (usize, usize) = (20, 20);

use crate::error::{MazeError, Result};
use crate::grids::{CellStatus, Coord, Dimensions, Direction, Neighborhood};

/// Wall flags of a single cell, `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top,
            Direction::South => self.bottom,
            Direction::West => self.left,
            Direction::East => self.right,
        }
    }

    pub fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.top = false,
            Direction::South => self.bottom = false,
            Direction::West => self.left = false,
            Direction::East => self.right = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cell {
    pub walls: Walls,
    /// set while carving, cleared before a grid is handed out
    pub visited: bool,
    /// only the depth first solver uses this, the others go by `status`
    pub solver_visited: bool,
    pub status: CellStatus,
}

/// Read only snapshot of a cell for whoever draws the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub walls: Walls,
    pub status: CellStatus,
}

pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    /// Every cell walled in on all four sides.
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        let len = match rows.checked_mul(columns) {
            Some(len) if len > 0 => len,
            _ => {
                return Err(MazeError::InvalidDimension {
                    rows,
                    cols: columns,
                })
            }
        };

        Ok(Self {
            cells: vec![Cell::default(); len],
            dims: Dimensions { rows, columns },
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        (self.dims.rows - 1, self.dims.columns - 1)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.dims.rows && coord.1 < self.dims.columns
    }

    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        (self.dims.columns * coord.0) + coord.1
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[self.index_of((row, column))]
    }

    #[inline]
    fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let index = self.index_of(coord);
        &mut self.cells[index]
    }

    #[inline]
    pub fn status(&self, coord: Coord) -> CellStatus {
        self.get_cell(coord.0, coord.1).status
    }

    #[inline]
    pub fn set_status(&mut self, coord: Coord, status: CellStatus) -> CellStatus {
        let cell = self.cell_mut(coord);
        let prev_status = cell.status;
        cell.status = status;
        prev_status
    }

    #[inline]
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.get_cell(coord.0, coord.1).visited
    }

    #[inline]
    pub fn mark_visited(&mut self, coord: Coord) {
        self.cell_mut(coord).visited = true;
    }

    #[inline]
    pub fn is_solver_visited(&self, coord: Coord) -> bool {
        self.get_cell(coord.0, coord.1).solver_visited
    }

    #[inline]
    pub fn mark_solver_visited(&mut self, coord: Coord) {
        self.cell_mut(coord).solver_visited = true;
    }

    pub fn neighborhood_of(&self, coord: Coord) -> Neighborhood {
        Neighborhood::around(coord, self.dims)
    }

    /// Adjacent cells with no wall in between, north, south, west, east.
    pub fn reachable_neighbors(&self, coord: Coord) -> Vec<Coord> {
        let walls = self.get_cell(coord.0, coord.1).walls;

        self.neighborhood_of(coord)
            .filter(|(_, direction)| !walls.has(*direction))
            .map(|(neighbor, _)| neighbor)
            .collect()
    }

    /// Adjacent cells the generator has not carved into yet, same order as
    /// `reachable_neighbors`.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.neighborhood_of(coord)
            .filter(|(neighbor, _)| !self.is_visited(*neighbor))
            .map(|(neighbor, _)| neighbor)
            .collect()
    }

    pub fn has_wall_between(&self, one: Coord, two: Coord) -> bool {
        match Direction::between(one, two) {
            Some(direction) => self.get_cell(one.0, one.1).walls.has(direction),
            None => true,
        }
    }

    /// Knocks down the wall on both sides, no-op for cells that aren't adjacent.
    pub fn clear_wall_between(&mut self, one: Coord, two: Coord) {
        if let Some(direction) = Direction::between(one, two) {
            self.cell_mut(one).walls.clear(direction);
            self.cell_mut(two).walls.clear(-direction);
        }
    }

    /// Count of passages, a perfect maze has exactly `rows * columns - 1`.
    pub fn open_edge_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.dims.rows {
            for column in 0..self.dims.columns {
                let walls = self.get_cell(row, column).walls;
                if row + 1 < self.dims.rows && !walls.bottom {
                    count += 1;
                }
                if column + 1 < self.dims.columns && !walls.right {
                    count += 1;
                }
            }
        }
        count
    }

    pub(crate) fn clear_generation_flags(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            cell.status = CellStatus::Unvisited;
        }
    }

    pub(crate) fn clear_solver_visited(&mut self) {
        for cell in &mut self.cells {
            cell.solver_visited = false;
        }
    }

    /// Wipes statuses and solver visitation, walls stay as they are.
    pub fn reset(&mut self) {
        self.clear_solver_visited();
        for cell in &mut self.cells {
            cell.status = CellStatus::Unvisited;
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let columns = self.dims.columns;
        self.cells.iter().enumerate().map(move |(index, cell)| CellView {
            row: index / columns,
            col: index % columns,
            walls: cell.walls,
            status: cell.status,
        })
    }

    pub fn count_status(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|cell| cell.status == status).count()
    }

    /// Final cells in order from the start, following open passages.
    pub fn final_path(&self) -> Vec<Coord> {
        let mut path = Vec::new();
        let start = self.start();
        if self.status(start) != CellStatus::Final {
            return path;
        }

        let mut prev = None;
        let mut current = start;
        loop {
            path.push(current);
            let next = self
                .reachable_neighbors(current)
                .into_iter()
                .find(|&n| Some(n) != prev && self.status(n) == CellStatus::Final);

            match next {
                Some(next) if path.len() < self.len() => {
                    prev = Some(current);
                    current = next;
                }
                _ => break,
            }
        }

        path
    }
}
