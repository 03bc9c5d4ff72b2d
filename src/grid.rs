use std::fmt;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CellState, CompassPrimary,
                   CoordinateOptionSmallVec, CoordinateSmallVec};
use crate::units::{ColumnLength, RowLength};

/// A rectangular grid of cell states backed by a flat row-major buffer.
///
/// The grid never resizes after creation and all cell access is bounds
/// checked: reads return `None` and writes an `InvalidGridCoordinate` error
/// for coordinates outside the `row_length` x `column_length` rectangle.
pub struct Grid {
    cells: Vec<CellState>,
    row_length: RowLength,
    column_length: ColumnLength,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridCoordinateError {
    InvalidGridCoordinate,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: row_length: {:?}, column_length: {:?}",
               self.row_length,
               self.column_length)
    }
}

impl Grid {
    /// A new grid with every cell set to `Wall`.
    pub fn new(row_length: RowLength, column_length: ColumnLength) -> Grid {
        let RowLength(width) = row_length;
        let ColumnLength(height) = column_length;

        Grid {
            cells: vec![CellState::Wall; width * height],
            row_length: row_length,
            column_length: column_length,
        }
    }

    #[inline]
    pub fn row_length(&self) -> RowLength {
        self.row_length
    }

    #[inline]
    pub fn column_length(&self) -> ColumnLength {
        self.column_length
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The state of the cell at the given coordinate, `None` when out of bounds.
    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Overwrite the state of one cell.
    pub fn set_cell(&mut self,
                    coord: Cartesian2DCoordinate,
                    state: CellState)
                    -> Result<(), GridCoordinateError> {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index] = state;
            Ok(())
        } else {
            Err(GridCoordinateError::InvalidGridCoordinate)
        }
    }

    /// Rewrite every cell to the one state.
    pub fn fill(&mut self, state: CellState) {
        for cell in &mut self.cells {
            *cell = state;
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        let RowLength(width) = self.row_length;
        let ColumnLength(height) = self.column_length;
        (coord.x as usize) < width && (coord.y as usize) < height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let RowLength(width) = self.row_length;
            Some((coord.y as usize * width) + coord.x as usize)
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        let neighbour_coord_opt = offset_coordinate(coord, direction, 1);

        neighbour_coord_opt.and_then(|neighbour_coord| {
            if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            }
        })
    }

    pub fn neighbours_at_directions(&self,
                                    coord: Cartesian2DCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    /// Cells that are to the North, South, East or West of a particular cell,
    /// whatever their state.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        [CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: self.size(),
            row_length: self.row_length,
        }
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Row,
            current_index: 0,
            row_length: self.row_length,
            column_length: self.column_length,
        }
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter {
            iter_type: BatchIterType::Column,
            current_index: 0,
            row_length: self.row_length,
            column_length: self.column_length,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    row_length: RowLength,
}

impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.row_length);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
// size_hint is exact, so the default len() is enough.
impl ExactSizeIterator for CellIter {}

// Converting the Grid into an iterator (CellIter - the default most sensible).
impl<'a> IntoIterator for &'a Grid {
    type Item = Cartesian2DCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    row_length: RowLength,
    column_length: ColumnLength,
}

impl Iterator for BatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let (batches_count, batch_size) = self.shape();

        if self.current_index < batches_count {
            let coords = (0..batch_size)
                .map(|i| {
                    if let BatchIterType::Row = self.iter_type {
                        Cartesian2DCoordinate::new(i as u32, self.current_index as u32)
                    } else {
                        Cartesian2DCoordinate::new(self.current_index as u32, i as u32)
                    }
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (batches_count, _) = self.shape();
        let lower_bound = batches_count - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

impl BatchIter {
    fn shape(&self) -> (usize, usize) {
        let RowLength(width) = self.row_length;
        let ColumnLength(height) = self.column_length;
        if let BatchIterType::Row = self.iter_type {
            (height, width)
        } else {
            (width, height)
        }
    }
}
