pub mod engine;

pub use engine::{Simulation, SimulationSnapshot};
