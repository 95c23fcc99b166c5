use super::*;
use rand::prelude::*;

/// Draws at most this many candidates for the second slot of a swap before giving up on sampling.
const MAX_RESAMPLES: u8 = 32;

/// Uniform source backed by a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct RandomShuffleSource {
    rng: SmallRng,
}

impl RandomShuffleSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn random_slot(&mut self) -> Slot {
        self.rng.random_range(0..CUP_COUNT as Slot)
    }
}

impl ShuffleSource for RandomShuffleSource {
    fn coin_cup(&mut self) -> CupId {
        self.rng.random_range(0..CUP_COUNT as CupId)
    }

    fn shuffle_count(&mut self, range: ShuffleRange) -> u8 {
        self.rng.random_range(range.min()..=range.max())
    }

    fn next_swap(&mut self) -> Swap {
        let a = self.random_slot();
        for _ in 0..MAX_RESAMPLES {
            let b = self.random_slot();
            if b != a {
                return Swap::new_unchecked(a, b);
            }
        }

        let b = (a + 1) % CUP_COUNT as Slot;
        log::warn!(
            "No distinct slot after {} resamples, swapping {} with {}",
            MAX_RESAMPLES,
            a,
            b
        );
        Swap::new_unchecked(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_round() {
        let mut first = RandomShuffleSource::new(42);
        let mut second = RandomShuffleSource::new(42);

        assert_eq!(first.coin_cup(), second.coin_cup());
        assert_eq!(
            first.shuffle_count(ShuffleRange::DEFAULT),
            second.shuffle_count(ShuffleRange::DEFAULT)
        );
        for _ in 0..16 {
            assert_eq!(first.next_swap(), second.next_swap());
        }
    }

    #[test]
    fn swaps_always_pick_distinct_slots() {
        let mut source = RandomShuffleSource::new(7);

        for _ in 0..1000 {
            let (a, b) = source.next_swap().slots();
            assert_ne!(a, b);
            assert!(is_valid_slot(a) && is_valid_slot(b));
        }
    }

    #[test]
    fn every_cup_can_hold_the_coin() {
        let mut seen = [false; CUP_COUNT];

        for seed in 0..200 {
            let coin = RandomShuffleSource::new(seed).coin_cup();
            seen[usize::from(coin)] = true;
        }

        assert_eq!(seen, [true; CUP_COUNT]);
    }

    #[test]
    fn shuffle_count_covers_the_whole_range() {
        let mut source = RandomShuffleSource::new(3);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let count = source.shuffle_count(ShuffleRange::DEFAULT);
            assert!(ShuffleRange::DEFAULT.contains(count));
            seen[usize::from(count - 3)] = true;
        }

        assert_eq!(seen, [true; 3]);
    }
}
