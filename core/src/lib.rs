#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod score;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cup {
    pub id: CupId,
    pub slot: Slot,
}

/// Pairwise exchange of the cups sitting in two distinct slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    a: Slot,
    b: Slot,
}

impl Swap {
    pub(crate) const fn new_unchecked(a: Slot, b: Slot) -> Self {
        Self { a, b }
    }

    pub fn new(a: Slot, b: Slot) -> Result<Self> {
        if !is_valid_slot(a) || !is_valid_slot(b) {
            return Err(GameError::InvalidSlot);
        }
        if a == b {
            return Err(GameError::SameSlot);
        }
        Ok(Self::new_unchecked(a, b))
    }

    pub const fn slots(self) -> (Slot, Slot) {
        (self.a, self.b)
    }
}

/// Cups ordered by the slot they occupy.
///
/// The layout only ever changes through [`CupLayout::swap`], which keeps every cup's `slot` equal
/// to its position, so the slot to cup mapping stays a bijection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupLayout {
    cups: [Cup; CUP_COUNT],
}

impl CupLayout {
    /// Starting layout, cup `i` in slot `i`.
    pub const fn initial() -> Self {
        Self {
            cups: [
                Cup { id: 0, slot: 0 },
                Cup { id: 1, slot: 1 },
                Cup { id: 2, slot: 2 },
            ],
        }
    }

    pub fn validate_slot(&self, slot: Slot) -> Result<Slot> {
        if is_valid_slot(slot) {
            Ok(slot)
        } else {
            Err(GameError::InvalidSlot)
        }
    }

    pub fn cup_at(&self, slot: Slot) -> Result<Cup> {
        self.validate_slot(slot).map(|slot| self[slot])
    }

    /// Slot currently holding the cup with identity `id`.
    pub fn slot_of(&self, id: CupId) -> Option<Slot> {
        self.cups.iter().find(|cup| cup.id == id).map(|cup| cup.slot)
    }

    pub fn swap(&mut self, swap: Swap) {
        let (a, b) = swap.slots();
        self.cups.swap(a.to_index(), b.to_index());
        self.cups[a.to_index()].slot = a;
        self.cups[b.to_index()].slot = b;
    }

    pub fn iter(&self) -> impl Iterator<Item = Cup> + '_ {
        self.cups.iter().copied()
    }

    /// Identities in slot order.
    pub fn ids(&self) -> [CupId; CUP_COUNT] {
        self.cups.map(|cup| cup.id)
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen_ids = [false; CUP_COUNT];
        for (index, cup) in self.cups.iter().enumerate() {
            if cup.slot.to_index() != index {
                return false;
            }
            let Some(seen) = seen_ids.get_mut(usize::from(cup.id)) else {
                return false;
            };
            if *seen {
                return false;
            }
            *seen = true;
        }
        true
    }
}

impl Default for CupLayout {
    fn default() -> Self {
        Self::initial()
    }
}

impl Index<Slot> for CupLayout {
    type Output = Cup;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.cups[slot.to_index()]
    }
}

/// Inclusive bounds on how many swaps a round performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleRange {
    min: u8,
    max: u8,
}

impl ShuffleRange {
    pub const DEFAULT: Self = Self { min: 3, max: 5 };

    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min > max {
            return Err(GameError::EmptyShuffleRange);
        }
        Ok(Self { min, max })
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    pub const fn contains(self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }
}

impl Default for ShuffleRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NoChange,
    Updated,
    RoundEnded,
}

impl AdvanceOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Updated => true,
            Self::RoundEnded => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Ignored,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            Ignored => false,
            Won => true,
            Lost => true,
        }
    }

    /// Round result to report, `None` when the guess was not taken.
    pub const fn won(self) -> Option<bool> {
        use GuessOutcome::*;
        match self {
            Ignored => None,
            Won => Some(true),
            Lost => Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_places_each_cup_in_its_own_slot() {
        let layout = CupLayout::initial();

        assert!(layout.is_bijection());
        assert_eq!(layout.ids(), [0, 1, 2]);
        for slot in SLOTS {
            assert_eq!(layout[slot].slot, slot);
        }
    }

    #[test]
    fn swap_exchanges_identities_and_keeps_slots_in_order() {
        let mut layout = CupLayout::initial();

        layout.swap(Swap::new(0, 2).unwrap());

        assert_eq!(layout.ids(), [2, 1, 0]);
        assert_eq!(layout.slot_of(0), Some(2));
        assert_eq!(layout.slot_of(2), Some(0));
        assert!(layout.is_bijection());
    }

    #[test]
    fn swap_rejects_equal_and_out_of_range_slots() {
        assert_eq!(Swap::new(1, 1), Err(GameError::SameSlot));
        assert_eq!(Swap::new(0, 3), Err(GameError::InvalidSlot));
        assert_eq!(Swap::new(7, 1), Err(GameError::InvalidSlot));
    }

    #[test]
    fn cup_at_validates_slot() {
        let layout = CupLayout::initial();

        assert_eq!(layout.cup_at(1), Ok(Cup { id: 1, slot: 1 }));
        assert_eq!(layout.cup_at(3), Err(GameError::InvalidSlot));
        assert_eq!(layout.slot_of(9), None);
    }

    #[test]
    fn shuffle_range_bounds_are_inclusive() {
        let range = ShuffleRange::default();

        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(ShuffleRange::new(4, 2), Err(GameError::EmptyShuffleRange));
    }
}
