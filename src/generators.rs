use rand::{Rng, XorShiftRng};

use crate::cells::{midpoint, offset_coordinate, Cartesian2DCoordinate, CellState, CompassPrimary};
use crate::grid::Grid;
use crate::units::{ColumnLength, RowLength};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationError {
    GridTooSmall,
}

/// Carve a perfect-maze topology into the grid with a randomized iterative
/// depth first search.
///
/// Corridor cells are carved two steps apart and the wall cell between each
/// carved pair is removed as well, so every corridor keeps a one cell thick
/// wall to its neighbouring corridors. The four carve directions are
/// reshuffled on every stack pop rather than once up front, otherwise the
/// maze would show a strong directional bias instead of branching evenly.
/// Afterwards the entrance (`Start`) and exit (`End`) markers are placed, the
/// exit is guaranteed at least one adjacent walkable cell, and the bottom row
/// and rightmost column are forced back to walls to close the outer boundary.
///
/// Grids narrower or shorter than 3 cells have no interior cell to carve from
/// and are rejected before any cell state changes.
pub fn depth_first_carve(grid: &mut Grid, rng: &mut XorShiftRng) -> Result<(), GenerationError> {
    let RowLength(width) = grid.row_length();
    let ColumnLength(height) = grid.column_length();
    if width < 3 || height < 3 {
        return Err(GenerationError::GridTooSmall);
    }

    grid.fill(CellState::Wall);

    let first_carved_cell = Cartesian2DCoordinate::new(1, 1);
    grid.set_cell(first_carved_cell, CellState::Path)
        .expect("cell (1, 1) exists in any grid of at least 3x3");

    let mut frontier = Vec::with_capacity(width * height);
    frontier.push(first_carved_cell);

    while let Some(current) = frontier.pop() {

        let mut directions = [CompassPrimary::North,
                              CompassPrimary::South,
                              CompassPrimary::East,
                              CompassPrimary::West];
        rng.shuffle(&mut directions);

        for dir in &directions {

            if let Some(neighbour) = offset_coordinate(current, *dir, 2) {

                let strictly_inside_border = neighbour.x > 0 &&
                                             (neighbour.x as usize) < width - 1 &&
                                             neighbour.y > 0 &&
                                             (neighbour.y as usize) < height - 1;
                if strictly_inside_border && grid.cell(neighbour) == Some(CellState::Wall) {
                    grid.set_cell(neighbour, CellState::Path)
                        .expect("carve target was bounds checked");
                    grid.set_cell(midpoint(current, neighbour), CellState::Path)
                        .expect("the midpoint of two in-bounds cells is in bounds");
                    frontier.push(neighbour);
                }
            }
        }
    }

    place_entrance_and_exit(grid, RowLength(width), ColumnLength(height));
    close_outer_boundary(grid, RowLength(width), ColumnLength(height));

    Ok(())
}

/// Force the entrance and exit markers and the two cells adjacent to the
/// exit, which keep the exit walkable even when the carve left its corner
/// isolated.
///
/// The adjacency carve happens before the markers are written: at the 3x3
/// minimum one of the forced path cells is the entrance cell itself and the
/// `Start` marker must win. The carve may punch a path cell through the top
/// border when the grid is only 3 cells tall.
fn place_entrance_and_exit(grid: &mut Grid, row_length: RowLength, column_length: ColumnLength) {
    let RowLength(width) = row_length;
    let ColumnLength(height) = column_length;
    let gc = |x: usize, y: usize| Cartesian2DCoordinate::new(x as u32, y as u32);

    grid.set_cell(gc(width - 3, height - 2), CellState::Path)
        .expect("exit adjacent cell is in bounds for a 3x3 or larger grid");
    grid.set_cell(gc(width - 2, height - 3), CellState::Path)
        .expect("exit adjacent cell is in bounds for a 3x3 or larger grid");

    grid.set_cell(gc(0, 1), CellState::Start)
        .expect("the entrance cell is in bounds for a 3x3 or larger grid");
    grid.set_cell(gc(width - 2, height - 2), CellState::End)
        .expect("the exit cell is in bounds for a 3x3 or larger grid");
}

// The carve never writes to the outer border, but the boundary is closed
// unconditionally all the same.
fn close_outer_boundary(grid: &mut Grid, row_length: RowLength, column_length: ColumnLength) {
    let RowLength(width) = row_length;
    let ColumnLength(height) = column_length;

    for x in 0..width {
        grid.set_cell(Cartesian2DCoordinate::new(x as u32, (height - 1) as u32), CellState::Wall)
            .expect("last row cell is in bounds");
    }
    for y in 0..height {
        grid.set_cell(Cartesian2DCoordinate::new((width - 1) as u32, y as u32), CellState::Wall)
            .expect("last column cell is in bounds");
    }
}
