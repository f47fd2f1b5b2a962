//! Per-letter feedback classifications
//!
//! `CellStatus` describes a tile in the grid; `KeyStatus` is the best feedback a
//! letter has earned so far, ordered so that a higher rank always wins.

/// State of a single tile in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    /// No letter typed yet
    #[default]
    Empty,
    /// Letter typed but the row has not been submitted
    Typed,
    /// Letter does not occur in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl CellStatus {
    /// True once a submit has scored this cell
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Absent | Self::Present | Self::Correct)
    }

    /// Emoji square used when sharing a result row
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty | Self::Typed => '⬜',
        }
    }
}

/// Best feedback seen for a keyboard letter during the current round
///
/// Variants are declared in rank order: `Untried < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyStatus {
    #[default]
    Untried,
    Absent,
    Present,
    Correct,
}

impl From<CellStatus> for KeyStatus {
    fn from(status: CellStatus) -> Self {
        match status {
            CellStatus::Correct => Self::Correct,
            CellStatus::Present => Self::Present,
            CellStatus::Absent => Self::Absent,
            CellStatus::Empty | CellStatus::Typed => Self::Untried,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_status_ranks_are_ordered() {
        assert!(KeyStatus::Absent > KeyStatus::Untried);
        assert!(KeyStatus::Correct > KeyStatus::Present);
        assert!(KeyStatus::Present > KeyStatus::Absent);
    }

    #[test]
    fn only_scored_cells_are_final() {
        assert!(!CellStatus::Empty.is_final());
        assert!(!CellStatus::Typed.is_final());
        assert!(CellStatus::Absent.is_final());
        assert!(CellStatus::Present.is_final());
        assert!(CellStatus::Correct.is_final());
    }

    #[test]
    fn cell_status_maps_to_key_status() {
        assert_eq!(KeyStatus::from(CellStatus::Correct), KeyStatus::Correct);
        assert_eq!(KeyStatus::from(CellStatus::Typed), KeyStatus::Untried);
    }
}
