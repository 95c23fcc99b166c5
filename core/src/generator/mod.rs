use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Every random decision a round makes goes through a source, so rounds can be replayed.
pub trait ShuffleSource {
    /// Identity of the cup the coin is placed under.
    fn coin_cup(&mut self) -> CupId;

    /// How many swaps the round performs.
    fn shuffle_count(&mut self, range: ShuffleRange) -> u8;

    fn next_swap(&mut self) -> Swap;
}
