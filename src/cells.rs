use smallvec::SmallVec;
use std::convert::From;

use crate::units::RowLength;

/// The state of one grid cell.
///
/// A carved maze holds exactly one `Start` and one `End`. The solver rewrites
/// `Path` cells to `Visited` as it explores and overwrites the `Start` marker
/// with `Visited` before its first expansion step; `End` is never overwritten.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Path,
    Visited,
    Start,
    End,
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x: x, y: y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: RowLength) -> Cartesian2DCoordinate {
        let RowLength(width) = row_length;
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<Cartesian2DCoordinate>; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Creates a new `Cartesian2DCoordinate` offset `distance` cells away in the given direction.
/// Returns None if the coordinate is not representable (x or y would drop below zero).
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary,
                         distance: u32)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => {
            if y >= distance {
                Some(Cartesian2DCoordinate { x: x, y: y - distance })
            } else {
                None
            }
        }
        CompassPrimary::South => Some(Cartesian2DCoordinate { x: x, y: y + distance }),
        CompassPrimary::East => Some(Cartesian2DCoordinate { x: x + distance, y: y }),
        CompassPrimary::West => {
            if x >= distance {
                Some(Cartesian2DCoordinate { x: x - distance, y: y })
            } else {
                None
            }
        }
    }
}

/// The cell lying halfway between two coordinates two steps apart - the wall
/// that must be removed to connect a carved pair.
pub fn midpoint(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
