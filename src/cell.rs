use crate::direction::Heading;
use crate::error::{ParseError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One lattice cell. Value type: equal coordinates are the same key.
///
/// Ordered row-major (by `y`, then `x`) so sorted snapshots read like the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one unit towards `heading` (wraps at the i64 edge)
    #[inline]
    pub const fn neighbor(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let (xs, ys) = s
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidCell(s.to_string()))?;
        let coord = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidCoordinate(part.trim().to_string()))
        };
        Ok(Self {
            x: coord(xs)?,
            y: coord(ys)?,
        })
    }
}
