use crate::ant::{Ant, AntState};
use crate::cell::Cell;
use crate::grid::GridState;
use colored::Colorize;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Detached copy of the whole simulation at one instant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSnapshot {
    pub ant: AntState,
    pub black_cells: BTreeSet<Cell>,
    pub steps: u64,
}

/// Owns the grid and the ant, and drives them forward together
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    grid: GridState,
    ant: Ant,
    origin: Cell,
}

impl Simulation {
    /// All-white grid with the ant at `origin` facing North
    pub fn new(origin: Cell) -> Self {
        Self {
            grid: GridState::new(),
            ant: Ant::new(origin),
            origin,
        }
    }

    #[inline]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    #[inline]
    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Cell the ant returns to on [`Simulation::reset`]
    #[inline]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Change where the next reset places the ant
    pub fn set_origin(&mut self, origin: Cell) {
        self.origin = origin;
    }

    /// Advance by one step
    #[inline]
    pub fn step(&mut self) {
        self.ant.step(&mut self.grid);
    }

    /// Advance by `steps` steps, returning the time spent
    pub fn run(&mut self, steps: u64) -> Duration {
        let start = Instant::now();
        for _ in 0..steps {
            self.ant.step(&mut self.grid);
        }
        start.elapsed()
    }

    /// Advance `total` steps in batches of `per_batch`, snapshotting after each.
    ///
    /// The last batch is shorter when `per_batch` does not divide `total`.
    /// A `per_batch` of zero is treated as one.
    pub fn run_batches<F>(&mut self, total: u64, per_batch: u64, mut on_batch: F) -> Duration
    where
        F: FnMut(&SimulationSnapshot),
    {
        let per_batch = per_batch.max(1);
        let mut elapsed = Duration::ZERO;
        let mut remaining = total;

        while remaining > 0 {
            let n = remaining.min(per_batch);
            elapsed += self.run(n);
            remaining -= n;
            on_batch(&self.snapshot());
        }

        elapsed
    }

    /// Clear the grid and put the ant back at the origin
    pub fn reset(&mut self) {
        log::trace!("reset: origin={}", self.origin);
        self.grid.reset();
        self.ant.reset(self.origin);
    }

    /// Copy of the ant, black cells and step count
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            ant: self.ant.state(),
            black_cells: self.grid.snapshot(),
            steps: self.ant.steps(),
        }
    }

    /// Print the black cells, one `x,y` per line in row-major order
    pub fn print_cells(&self) {
        for cell in self.grid.snapshot() {
            println!("{}", cell);
        }
    }

    /// Print simulation summary
    pub fn print_summary(&self, simulation_time: Duration) {
        let state = self.ant.state();
        let bounds = match self.grid.bounds() {
            Some((lo, hi)) => format!("bounds={}..{}", lo, hi),
            None => "bounds=none".to_string(),
        };

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("steps={}", self.ant.steps()).cyan(),
            format!("ant={}", state.position).cyan(),
            format!("heading={}", state.heading).cyan(),
            format!("black={}", self.grid.black_count()).cyan(),
            bounds.dimmed(),
        );
    }
}
