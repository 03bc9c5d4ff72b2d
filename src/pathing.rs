use crate::cells::{Cartesian2DCoordinate, CellState, CompassPrimary};
use crate::grid::Grid;

/// The outcome of a single expansion step of the depth first search.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepResult {
    /// The frontier still holds cells awaiting expansion.
    Continue,
    /// The popped cell is the exit.
    Found,
    /// The frontier emptied without reaching the exit.
    Exhausted,
}

/// Iterative depth first exploration of a carved maze, one expansion at a
/// time.
///
/// The search owns only its frontier stack; the grid is passed into each
/// step, so a collaborator is free to render the grid between steps. The
/// visited trail follows stack discipline (the most recently pushed
/// neighbour is expanded first) and is not a shortest path.
#[derive(Debug)]
pub struct DepthFirstSearch {
    frontier: Vec<Cartesian2DCoordinate>,
}

const ENTRANCE: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 0, y: 1 };

const EXPLORE_ORDER: [CompassPrimary; 4] = [CompassPrimary::South,
                                            CompassPrimary::East,
                                            CompassPrimary::North,
                                            CompassPrimary::West];

impl DepthFirstSearch {
    /// Start a search at the maze entrance (0, 1).
    ///
    /// The entrance is marked `Visited` immediately, overwriting its `Start`
    /// marker. Returns `None` for a grid too small to hold the entrance.
    pub fn new(grid: &mut Grid) -> Option<DepthFirstSearch> {
        if !grid.is_valid_coordinate(ENTRANCE) {
            return None;
        }
        grid.set_cell(ENTRANCE, CellState::Visited)
            .expect("the entrance coordinate was bounds checked");

        Some(DepthFirstSearch { frontier: vec![ENTRANCE] })
    }

    /// Expand one frontier cell.
    ///
    /// The exit check happens when a cell is popped, never when its
    /// neighbours are pushed, so the exit's own neighbours are marked
    /// `Visited` on the step before `Found` is reported. Keeping that
    /// termination point stable keeps step counts in line with the rendered
    /// step-by-step visualisation.
    pub fn step(&mut self, grid: &mut Grid) -> StepResult {
        let current = match self.frontier.pop() {
            Some(coord) => coord,
            None => return StepResult::Exhausted,
        };

        if grid.cell(current) == Some(CellState::End) {
            return StepResult::Found;
        }

        let neighbour_options = grid.neighbours_at_directions(current, &EXPLORE_ORDER);
        for neighbour in neighbour_options.iter().filter_map(|&coord_opt| coord_opt) {
            match grid.cell(neighbour) {
                Some(CellState::Path) => {
                    grid.set_cell(neighbour, CellState::Visited)
                        .expect("the neighbour came from a bounds checked query");
                    self.frontier.push(neighbour);
                }
                // The exit is pushed unmarked so the renderer never loses it.
                Some(CellState::End) => self.frontier.push(neighbour),
                _ => {}
            }
        }

        StepResult::Continue
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::{SeedableRng, XorShiftRng};

    use super::*;
    use crate::cells::{Cartesian2DCoordinate, CellState};
    use crate::generators;
    use crate::grid::Grid;
    use crate::units::{ColumnLength, RowLength};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    /// A 5x3 grid holding a single straight corridor from entrance to exit.
    fn corridor_grid() -> Grid {
        let mut g = Grid::new(RowLength(5), ColumnLength(3));
        g.set_cell(gc(0, 1), CellState::Start).expect("in bounds");
        g.set_cell(gc(1, 1), CellState::Path).expect("in bounds");
        g.set_cell(gc(2, 1), CellState::Path).expect("in bounds");
        g.set_cell(gc(3, 1), CellState::End).expect("in bounds");
        g
    }

    #[test]
    fn starting_a_search_overwrites_the_start_marker() {
        let mut g = corridor_grid();
        let _search = DepthFirstSearch::new(&mut g).expect("entrance exists");
        assert_eq!(g.cell(gc(0, 1)), Some(CellState::Visited));
    }

    #[test]
    fn no_search_on_a_grid_without_an_entrance_cell() {
        let mut g = Grid::new(RowLength(3), ColumnLength(1));
        assert!(DepthFirstSearch::new(&mut g).is_none());
    }

    #[test]
    fn walks_a_corridor_to_the_exit() {
        let mut g = corridor_grid();
        let mut search = DepthFirstSearch::new(&mut g).expect("entrance exists");

        assert_eq!(search.step(&mut g), StepResult::Continue); // expands (0,1)
        assert_eq!(search.step(&mut g), StepResult::Continue); // expands (1,1)
        assert_eq!(search.step(&mut g), StepResult::Continue); // expands (2,1)
        assert_eq!(search.step(&mut g), StepResult::Found); // pops the exit

        assert_eq!(g.cell(gc(1, 1)), Some(CellState::Visited));
        assert_eq!(g.cell(gc(2, 1)), Some(CellState::Visited));
        assert_eq!(g.cell(gc(3, 1)), Some(CellState::End));
    }

    #[test]
    fn the_exit_is_recognised_on_pop_not_on_push() {
        let mut g = corridor_grid();
        let mut search = DepthFirstSearch::new(&mut g).expect("entrance exists");

        // The step that pushes the exit still reports Continue; only popping
        // the exit on the following step reports Found.
        assert_eq!(search.step(&mut g), StepResult::Continue);
        assert_eq!(search.step(&mut g), StepResult::Continue);
        assert_eq!(search.step(&mut g), StepResult::Continue);
        assert_eq!(g.cell(gc(3, 1)), Some(CellState::End));
        assert_eq!(search.step(&mut g), StepResult::Found);
    }

    #[test]
    fn exhausts_cleanly_when_the_exit_is_unreachable() {
        let mut g = Grid::new(RowLength(3), ColumnLength(3));
        g.set_cell(gc(0, 1), CellState::Start).expect("in bounds");
        // No path cells at all - the entrance is sealed in by walls.

        let mut search = DepthFirstSearch::new(&mut g).expect("entrance exists");
        assert_eq!(search.step(&mut g), StepResult::Continue);
        assert_eq!(search.step(&mut g), StepResult::Exhausted);
        assert_eq!(search.step(&mut g), StepResult::Exhausted);
    }

    #[test]
    fn solves_the_minimum_size_maze() {
        let mut g = Grid::new(RowLength(3), ColumnLength(3));
        let mut rng = XorShiftRng::from_seed([5, 17, 31, 43]);
        generators::depth_first_carve(&mut g, &mut rng).expect("carve failed");

        let mut search = DepthFirstSearch::new(&mut g).expect("entrance exists");
        assert_eq!(search.step(&mut g), StepResult::Continue);
        assert_eq!(search.step(&mut g), StepResult::Found);
    }

    #[test]
    fn quickcheck_generated_mazes_are_always_solved() {

        fn property(w: u8, h: u8, seed: u32) -> TestResult {
            let width = 3 + (w % 30) as usize;
            let height = 3 + (h % 30) as usize;

            let mut g = Grid::new(RowLength(width), ColumnLength(height));
            // xorshift cannot accept an all zero seed
            let mut rng = XorShiftRng::from_seed([seed | 1, seed.wrapping_mul(31), 7, 13]);
            generators::depth_first_carve(&mut g, &mut rng).expect("carve failed");

            let mut search = DepthFirstSearch::new(&mut g).expect("entrance exists");

            // Every step pops one frontier entry, path cells are pushed at
            // most once and the exit at most once per expanded neighbour, so
            // the step count is comfortably bounded by the cell count.
            let step_limit = width * height + 5;
            for _ in 0..step_limit {
                match search.step(&mut g) {
                    StepResult::Found => return TestResult::passed(),
                    StepResult::Exhausted => return TestResult::failed(),
                    StepResult::Continue => {}
                }
            }
            TestResult::failed()
        }
        quickcheck(property as fn(u8, u8, u32) -> TestResult);
    }
}
