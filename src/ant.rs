use crate::cell::Cell;
use crate::direction::Heading;
use crate::grid::GridState;

/// Point-in-time copy of the ant, handed out by [`Ant::state`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AntState {
    pub position: Cell,
    pub heading: Heading,
}

/// The single ant of a simulation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ant {
    position: Cell,
    heading: Heading,
    steps: u64,
}

impl Ant {
    /// Create an ant at `origin`, facing North
    pub fn new(origin: Cell) -> Self {
        Self {
            position: origin,
            heading: Heading::North,
            steps: 0,
        }
    }

    /// Apply one Langton's Ant transition.
    ///
    /// The order is fixed: read the colour, turn (right on white, left on
    /// black), flip the cell being left, then move one unit.
    #[inline]
    pub fn step(&mut self, grid: &mut GridState) {
        let here = self.position;
        self.heading = if grid.is_black(here) {
            self.heading.turn_left()
        } else {
            self.heading.turn_right()
        };
        grid.flip_color(here);
        self.position = here.neighbor(self.heading);
        self.steps += 1;
    }

    /// Copy of position and heading
    #[inline]
    pub fn state(&self) -> AntState {
        AntState {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Steps taken since creation or the last reset
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Put the ant back at `origin` facing North. The grid is left alone.
    pub fn reset(&mut self, origin: Cell) {
        *self = Self::new(origin);
    }
}
