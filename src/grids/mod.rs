pub mod wall_grid;

pub use wall_grid::{Cell, CellView, WallGrid, Walls};

pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// Directions in neighbor resolution order, north is the row above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Direction that leads from `from` to the adjacent cell `to`
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        if to.1 == from.1 && to.0 + 1 == from.0 {
            Some(Direction::North)
        } else if to.1 == from.1 && from.0 + 1 == to.0 {
            Some(Direction::South)
        } else if to.0 == from.0 && to.1 + 1 == from.1 {
            Some(Direction::West)
        } else if to.0 == from.0 && from.1 + 1 == to.1 {
            Some(Direction::East)
        } else {
            None
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::West,
            3 => Direction::East,
            _ => unreachable!(),
        }
    }
}

pub type Neighbor = (Coord, Direction);

/// In-bounds cells around a coordinate, iterated north, south, west, east.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Coord>,
    pub south: Option<Coord>,
    pub west: Option<Coord>,
    pub east: Option<Coord>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            west: None,
            east: None,
            counter: 0,
        }
    }

    pub fn around(coord: Coord, dims: Dimensions) -> Self {
        let (row, column) = coord;
        let mut neighbors = Self::new();

        if row > 0 {
            neighbors.north = Some((row - 1, column));
        }
        if row + 1 < dims.rows {
            neighbors.south = Some((row + 1, column));
        }
        if column > 0 {
            neighbors.west = Some((row, column - 1));
        }
        if column + 1 < dims.columns {
            neighbors.east = Some((row, column + 1));
        }

        neighbors
    }

    pub fn get(&self, direction: Direction) -> Option<Coord> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let direction = Direction::from(self.counter);
            self.counter += 1;

            if let Some(coord) = self.get(direction) {
                return Some((coord, direction));
            }
        }

        None
    }
}

/// Render-facing tag of a cell, written by generators and solvers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellStatus {
    Unvisited = 0,
    Explored = 1,
    Current = 2,
    Final = 3,
}

impl Default for CellStatus {
    fn default() -> Self {
        CellStatus::Unvisited
    }
}
