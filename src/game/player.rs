use std::fmt;

use super::board::Cell;

/// Positional identity of a side: the first or second player of a session.
/// Turn order and the win tally key off this, never off display identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Get the other slot
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    /// Convert slot to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Taken(self)
    }

    /// Index into slot-keyed pairs (0 for first, 1 for second)
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

/// Display token for one side, e.g. a color name picked by the player.
/// The rules engine carries it around but never interprets it; whether it
/// names something renderable is the presentation layer's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerIdentity(String);

impl PlayerIdentity {
    pub fn new(label: impl Into<String>) -> Self {
        PlayerIdentity(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_slot() {
        assert_eq!(Slot::First.other(), Slot::Second);
        assert_eq!(Slot::Second.other(), Slot::First);
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(Slot::First.index(), 0);
        assert_eq!(Slot::Second.index(), 1);
    }

    #[test]
    fn test_identity_display() {
        let identity = PlayerIdentity::new("teal");
        assert_eq!(identity.as_str(), "teal");
        assert_eq!(identity.to_string(), "teal");
    }
}
