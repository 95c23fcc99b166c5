use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Placing,
    Shuffling,
    Guessing,
    Revealing,
}

impl Phase {
    pub const fn accepts_guess(self) -> bool {
        matches!(self, Self::Guessing)
    }

    pub const fn shows_coin(self) -> bool {
        matches!(self, Self::Placing | Self::Revealing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Revealing)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Placing
    }
}

/// Delays between the timed steps of a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTiming {
    /// Coin shown under its cup before shuffling starts.
    pub placing_dwell: Duration,
    /// Coin hidden, cups still, before the first swap.
    pub pre_shuffle_pause: Duration,
    /// Swap animation settling.
    pub swap_settle: Duration,
    /// Gap after a swap has settled.
    pub step_interval: Duration,
    /// Reveal shown before the round ends.
    pub reveal_hold: Duration,
}

impl RoundTiming {
    pub const DEFAULT: Self = Self {
        placing_dwell: Duration::from_millis(1500),
        pre_shuffle_pause: Duration::from_millis(300),
        swap_settle: Duration::from_millis(300),
        step_interval: Duration::from_millis(200),
        reveal_hold: Duration::from_millis(2500),
    };

    /// Full wait after each swap, settle and interval back to back.
    pub const fn step_delay(&self) -> Duration {
        self.swap_settle.saturating_add(self.step_interval)
    }
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub shuffles: ShuffleRange,
    pub timing: RoundTiming,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleProgress {
    pub step: u8,
    pub total: u8,
}

/// Everything a view needs to draw the round, taken between two mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub cups: CupLayout,
    pub phase: Phase,
    /// Slot of the coin, only while it is visible.
    pub coin_slot: Option<Slot>,
    pub progress: Option<ShuffleProgress>,
    pub selected_slot: Option<Slot>,
    pub won: Option<bool>,
}

impl RoundSnapshot {
    pub const fn is_coin_visible(&self) -> bool {
        self.coin_slot.is_some()
    }
}

/// The single pending step of the round sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cue {
    HideCoin,
    Swap,
    BeginGuessing,
    EndRound,
}

/// One round of the shell game.
///
/// Creating the engine places the coin and arms the round sequence. The host waits
/// [`next_delay`](Self::next_delay) and then calls [`advance`](Self::advance), one timer at a
/// time, until the engine asks for a guess. Dropping the host's timer abandons the round.
///
/// The coin is tracked by cup identity; its slot is derived from the layout whenever needed.
#[derive(Clone, Debug)]
pub struct ShuffleEngine<S = RandomShuffleSource> {
    source: S,
    config: RoundConfig,
    cups: CupLayout,
    coin_cup: CupId,
    phase: Phase,
    total_shuffles: u8,
    swaps_done: u8,
    shuffle_step: Option<u8>,
    selected_slot: Option<Slot>,
    won: Option<bool>,
    cue: Option<Cue>,
    ended: bool,
}

impl ShuffleEngine<RandomShuffleSource> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomShuffleSource::new(seed), RoundConfig::default())
    }
}

impl<S: ShuffleSource> ShuffleEngine<S> {
    pub fn new(mut source: S, config: RoundConfig) -> Self {
        let coin_cup = source.coin_cup();
        log::debug!("coin placed under cup {}", coin_cup);
        Self {
            source,
            config,
            cups: CupLayout::initial(),
            coin_cup,
            phase: Phase::Placing,
            total_shuffles: 0,
            swaps_done: 0,
            shuffle_step: None,
            selected_slot: None,
            won: None,
            cue: Some(Cue::HideCoin),
            ended: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn cups(&self) -> &CupLayout {
        &self.cups
    }

    pub fn coin_cup(&self) -> CupId {
        self.coin_cup
    }

    pub fn coin_slot(&self) -> Slot {
        // the layout is a bijection over every identity, so the coin cup is always on the table
        self.cups.slot_of(self.coin_cup).unwrap_or_default()
    }

    pub fn is_coin_visible(&self) -> bool {
        self.phase.shows_coin()
    }

    pub fn total_shuffles(&self) -> u8 {
        self.total_shuffles
    }

    pub fn progress(&self) -> Option<ShuffleProgress> {
        self.shuffle_step.map(|step| ShuffleProgress {
            step,
            total: self.total_shuffles,
        })
    }

    pub fn selected_slot(&self) -> Option<Slot> {
        self.selected_slot
    }

    pub fn won(&self) -> Option<bool> {
        self.won
    }

    /// Whether the "round ended" notification has fired.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            cups: self.cups,
            phase: self.phase,
            coin_slot: self.is_coin_visible().then(|| self.coin_slot()),
            progress: self.progress(),
            selected_slot: self.selected_slot,
            won: self.won,
        }
    }

    /// How long the host waits before calling [`advance`](Self::advance), or `None` when nothing
    /// is scheduled (waiting for a guess, or the round is over).
    pub fn next_delay(&self) -> Option<Duration> {
        let timing = &self.config.timing;
        self.cue.map(|cue| match cue {
            Cue::HideCoin => timing.placing_dwell,
            Cue::Swap if self.swaps_done == 0 => timing.pre_shuffle_pause,
            Cue::Swap => timing.step_delay(),
            Cue::BeginGuessing if self.swaps_done == 0 => timing.pre_shuffle_pause,
            Cue::BeginGuessing => timing.step_delay(),
            Cue::EndRound => timing.reveal_hold,
        })
    }

    /// Applies the pending step of the round sequence.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let Some(cue) = self.cue.take() else {
            return AdvanceOutcome::NoChange;
        };

        match cue {
            Cue::HideCoin => {
                self.phase = Phase::Shuffling;
                self.total_shuffles = self.source.shuffle_count(self.config.shuffles);
                log::debug!("shuffling {} times", self.total_shuffles);
                self.cue = Some(self.cue_after_swap());
                AdvanceOutcome::Updated
            }
            Cue::Swap => {
                let swap = self.source.next_swap();
                self.apply_swap(swap);
                self.swaps_done = self.swaps_done.saturating_add(1);
                self.shuffle_step = Some(self.swaps_done);
                self.cue = Some(self.cue_after_swap());
                AdvanceOutcome::Updated
            }
            Cue::BeginGuessing => {
                self.shuffle_step = None;
                self.phase = Phase::Guessing;
                log::debug!("waiting for a guess");
                AdvanceOutcome::Updated
            }
            Cue::EndRound => {
                self.ended = true;
                log::debug!("round ended");
                AdvanceOutcome::RoundEnded
            }
        }
    }

    /// Takes the player's pick. Outside of the guessing phase this does nothing at all.
    pub fn guess(&mut self, slot: Slot) -> Result<GuessOutcome> {
        if !self.phase.accepts_guess() {
            log::debug!("guess at slot {} ignored while {:?}", slot, self.phase);
            return Ok(GuessOutcome::Ignored);
        }

        let cup = self.cups.cup_at(slot)?;
        let won = cup.id == self.coin_cup;

        self.selected_slot = Some(slot);
        self.phase = Phase::Revealing;
        self.won = Some(won);
        self.cue = Some(Cue::EndRound);

        log::debug!(
            "guessed slot {} (cup {}), coin under cup {} at slot {}",
            slot,
            cup.id,
            self.coin_cup,
            self.coin_slot()
        );

        Ok(if won {
            GuessOutcome::Won
        } else {
            GuessOutcome::Lost
        })
    }

    fn cue_after_swap(&self) -> Cue {
        if self.swaps_done < self.total_shuffles {
            Cue::Swap
        } else {
            Cue::BeginGuessing
        }
    }

    fn apply_swap(&mut self, swap: Swap) {
        let (a, b) = swap.slots();
        debug_assert_ne!(a, b, "swap must use two distinct slots");
        log::trace!("swap slots {} and {}", a, b);
        self.cups.swap(swap);
        debug_assert!(self.cups.is_bijection());
    }
}
