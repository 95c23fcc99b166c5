/// Identity of a cup, fixed once a round starts.
pub type CupId = u8;

/// Positional index a cup occupies, `0` is left, `1` center and `2` right.
pub type Slot = u8;

/// Number of cups, and therefore of slots, on the table.
pub const CUP_COUNT: usize = 3;

/// Every slot in left-to-right order.
pub const SLOTS: [Slot; CUP_COUNT] = [0, 1, 2];

pub trait ToIndex {
    fn to_index(self) -> usize;
}

impl ToIndex for Slot {
    fn to_index(self) -> usize {
        self.into()
    }
}

pub const fn is_valid_slot(slot: Slot) -> bool {
    (slot as usize) < CUP_COUNT
}
