use std::fmt;

/// Cardinal heading, ordinals in clockwise order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings, clockwise from North
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// Clockwise ordinal (North = 0 .. West = 3)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading for an ordinal, taken mod 4
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx % 4]
    }

    /// Rotate 90° clockwise
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate 90° counter-clockwise
    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit move as (dx, dy). Screen coordinates: y grows downward, so North is -y.
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
