use std::fmt;

use crate::cells::CellState;
use crate::grid::Grid;
use crate::units::{ColumnLength, RowLength};

/// The fixed two character glyph for a cell state.
pub fn cell_glyph(state: CellState) -> &'static str {
    match state {
        CellState::Wall => "# ",
        CellState::Path => "  ",
        CellState::Visited => "2 ",
        CellState::Start => "S ",
        CellState::End => "E ",
    }
}

/// Render the whole grid as text, one newline terminated line per row.
/// A pure function of the grid state - no mutation, so rendering the same
/// grid twice gives identical output.
pub fn render_text_grid(grid: &Grid) -> String {
    let RowLength(width) = grid.row_length();
    let ColumnLength(height) = grid.column_length();

    let mut output = String::with_capacity((width * 2 + 1) * height);
    for row in grid.iter_row() {
        for coord in row {
            let state = grid.cell(coord)
                .expect("the row iterator only yields in-bounds coordinates");
            output.push_str(cell_glyph(state));
        }
        output.push('\n');
    }

    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text_grid(self))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::{Cartesian2DCoordinate, CellState};
    use crate::grid::Grid;
    use crate::units::{ColumnLength, RowLength};

    fn marker_grid() -> Grid {
        let mut g = Grid::new(RowLength(3), ColumnLength(3));
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        g.set_cell(gc(0, 1), CellState::Start).expect("in bounds");
        g.set_cell(gc(1, 1), CellState::End).expect("in bounds");
        g.set_cell(gc(1, 0), CellState::Path).expect("in bounds");
        g.set_cell(gc(1, 2), CellState::Visited).expect("in bounds");
        g
    }

    #[test]
    fn the_fixed_glyph_set() {
        assert_eq!(cell_glyph(CellState::Wall), "# ");
        assert_eq!(cell_glyph(CellState::Path), "  ");
        assert_eq!(cell_glyph(CellState::Visited), "2 ");
        assert_eq!(cell_glyph(CellState::Start), "S ");
        assert_eq!(cell_glyph(CellState::End), "E ");
    }

    #[test]
    fn renders_rows_of_glyphs() {
        let g = marker_grid();
        assert_eq!(render_text_grid(&g),
                   "#   # \n\
                    S E # \n\
                    # 2 # \n");
    }

    #[test]
    fn every_row_is_newline_terminated() {
        let g = Grid::new(RowLength(4), ColumnLength(2));
        let rendered = render_text_grid(&g);

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.ends_with('\n'));
        assert!(rendered.lines().all(|line| line.len() == 4 * 2));
    }

    #[test]
    fn rendering_is_idempotent() {
        let g = marker_grid();
        assert_eq!(render_text_grid(&g), render_text_grid(&g));
    }

    #[test]
    fn display_matches_the_text_renderer() {
        let g = marker_grid();
        assert_eq!(format!("{}", g), render_text_grid(&g));
    }
}
