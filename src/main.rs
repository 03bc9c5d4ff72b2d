use docopt::Docopt;
use mazewalk::{
    generators,
    grid::Grid,
    pathing::{DepthFirstSearch, StepResult},
    units::{ColumnLength, RowLength},
};
use serde_derive::Deserialize;
use std::io;
use std::io::prelude::*;

const USAGE: &str = "Mazewalk

Carves a random maze, then explores it from entrance to exit one step at a
time, printing the grid after every step.

Usage:
    mazewalk_driver -h | --help
    mazewalk_driver [--grid-width=<w>] [--grid-height=<h>]

Options:
    -h --help          Show this screen.
    --grid-width=<w>   The maze width in cells, minimum 3. Prompted for when not given.
    --grid-height=<h>  The maze height in cells, minimum 3. Prompted for when not given.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: Option<usize>,
    flag_grid_height: Option<usize>,
}

// Driver-side errors only: bad dimension input and console failures, plus
// the docopt and io foreign links. The library's own error enums are mapped
// into these with fixed messages before they reach the user.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            ConsoleIo(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let width = dimension_from(args.flag_grid_width, "Enter the maze width: ")?;
    let height = dimension_from(args.flag_grid_height, "Enter the maze height: ")?;
    if width < 3 || height < 3 {
        return Err("The maze size must be at least 3x3.".into());
    }

    let mut maze_grid = Grid::new(RowLength(width), ColumnLength(height));
    let mut rng = rand::weak_rng();
    generators::depth_first_carve(&mut maze_grid, &mut rng)
        .map_err(|_| "The maze size must be at least 3x3.")?;

    let mut search = DepthFirstSearch::new(&mut maze_grid)
        .ok_or("The carved grid is missing its entrance cell.")?;

    loop {
        match search.step(&mut maze_grid) {
            StepResult::Continue => {
                println!("{}", maze_grid);
                wait_for_enter()?;
            }
            StepResult::Found => {
                println!("Found the exit!");
                break;
            }
            StepResult::Exhausted => {
                println!("Explored the whole maze without reaching the exit.");
                break;
            }
        }
    }

    Ok(())
}

/// A maze dimension, either taken from the command line or prompted for on
/// the console as the first whitespace delimited base-10 token of the reply.
fn dimension_from(arg: Option<usize>, prompt: &str) -> Result<usize> {
    if let Some(dimension) = arg {
        return Ok(dimension);
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let token = line.split_whitespace()
        .next()
        .ok_or("Expected a base-10 number for the maze size.")?;
    token.parse::<usize>()
        .chain_err(|| "Expected a base-10 number for the maze size.")
}

// Any key is acceptable, only the newline is consumed.
fn wait_for_enter() -> Result<()> {
    println!("Press enter to advance the search...");
    let mut pause = String::new();
    io::stdin().read_line(&mut pause)?;
    Ok(())
}
