use serde::{Deserialize, Serialize};

/// What the player can see at one position of the display overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Covered,
    Uncovered { count: u8, mine: bool },
}

impl Slot {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_uncovered(self) -> bool {
        !self.is_covered()
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::Covered
    }
}
