//! # Langton's Ant
//!
//! A single ant walking an unbounded black-and-white grid.
//!
//! On a white cell the ant turns right, on a black cell it turns left; either
//! way it flips the cell it stands on and moves forward one cell. Coordinates
//! follow screen convention: `y` grows downward, so North is `y - 1`.
//!
//! [`GridState`] and [`Ant`] are plain owned values; [`Simulation`] pairs them
//! for a driver that steps in batches and reads snapshots between batches.

pub mod ant;
pub mod cell;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod simulation;

pub use ant::{Ant, AntState};
pub use cell::Cell;
pub use cli::Args;
pub use direction::Heading;
pub use error::{ParseError, Result};
pub use grid::GridState;
pub use simulation::{Simulation, SimulationSnapshot};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntState, Args, Cell, GridState, Heading, ParseError, Result, Simulation,
        SimulationSnapshot,
    };
}
