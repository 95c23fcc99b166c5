use super::*;
use alloc::collections::VecDeque;

/// Fixed coin placement and swap list, for replays and tests.
///
/// The script decides the swap count on its own, so rounds outside the configured range (including
/// rounds with no swaps at all) can be replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedShuffleSource {
    coin: CupId,
    swaps: VecDeque<Swap>,
}

impl ScriptedShuffleSource {
    /// Fails on an unknown coin cup, or on more swaps than a round can count.
    pub fn new(coin: CupId, swaps: impl IntoIterator<Item = Swap>) -> Result<Self> {
        if usize::from(coin) >= CUP_COUNT {
            return Err(GameError::InvalidCup);
        }
        let swaps: VecDeque<Swap> = swaps.into_iter().collect();
        if swaps.len() > usize::from(u8::MAX) {
            return Err(GameError::ScriptTooLong);
        }
        Ok(Self { coin, swaps })
    }

    pub fn remaining(&self) -> usize {
        self.swaps.len()
    }
}

impl ShuffleSource for ScriptedShuffleSource {
    fn coin_cup(&mut self) -> CupId {
        self.coin
    }

    fn shuffle_count(&mut self, _range: ShuffleRange) -> u8 {
        // bounded by `new`
        self.swaps.len().try_into().unwrap_or(u8::MAX)
    }

    fn next_swap(&mut self) -> Swap {
        self.swaps.pop_front().unwrap_or_else(|| {
            log::warn!("Swap script exhausted, repeating the left pair");
            Swap::new_unchecked(0, 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_coin_cup() {
        assert_eq!(
            ScriptedShuffleSource::new(3, core::iter::empty()),
            Err(GameError::InvalidCup)
        );
    }

    #[test]
    fn rejects_scripts_too_long_to_count() {
        let swap = Swap::new(0, 1).unwrap();

        let longest = ScriptedShuffleSource::new(0, core::iter::repeat_n(swap, 255));
        assert_eq!(
            longest.map(|mut source| source.shuffle_count(ShuffleRange::DEFAULT)),
            Ok(u8::MAX)
        );
        assert_eq!(
            ScriptedShuffleSource::new(0, core::iter::repeat_n(swap, 256)),
            Err(GameError::ScriptTooLong)
        );
    }

    #[test]
    fn replays_swaps_in_order() {
        let swaps = [Swap::new(0, 2).unwrap(), Swap::new(1, 0).unwrap()];
        let mut source = ScriptedShuffleSource::new(1, swaps).unwrap();

        assert_eq!(source.coin_cup(), 1);
        assert_eq!(source.shuffle_count(ShuffleRange::DEFAULT), 2);
        assert_eq!(source.next_swap(), swaps[0]);
        assert_eq!(source.next_swap(), swaps[1]);
        assert_eq!(source.remaining(), 0);
    }
}
