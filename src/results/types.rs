//! Result data types

use std::fmt;

/// One match reported by the scanner: the pair of positions it found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    pub from_position: u32,
    pub to_position: u32,
}

impl Hit {
    pub fn new(from_position: u32, to_position: u32) -> Self {
        Self {
            from_position,
            to_position,
        }
    }
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from_position, self.to_position)
    }
}
