use crate::controls::{ControlsView, HelpView};
use crate::round::RoundView;
use crate::stats::StatsView;
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use shellgame_core as game;
use yew::prelude::*;

/// How long the help panel stays up on its own after the page loads.
const HELP_AUTO_HIDE_MS: u32 = 8000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartRound,
    Advance,
    Guess(game::Slot),
    ResetStats,
    ToggleHelp,
    HideHelp,
    CycleTheme,
}

#[derive(Args, Properties, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random, round `k` then uses `seed + k`
    #[arg(short, long)]
    pub seed: Option<u64>,
}

fn round_seed(fixed: Option<u64>, round_index: u64, random: impl FnOnce() -> u64) -> u64 {
    fixed.map_or_else(random, |seed| seed.wrapping_add(round_index))
}

/// Round and score state, kept apart from the timers that drive it.
#[derive(Debug, Default)]
pub(crate) struct GameSession {
    round: Option<game::ShuffleEngine>,
    score: game::Scoreboard,
    rounds_started: u64,
}

impl GameSession {
    pub(crate) fn round(&self) -> Option<&game::ShuffleEngine> {
        self.round.as_ref()
    }

    pub(crate) fn score(&self) -> &game::Scoreboard {
        &self.score
    }

    pub(crate) fn next_delay(&self) -> Option<std::time::Duration> {
        self.round.as_ref().and_then(|round| round.next_delay())
    }

    /// Begins a round unless one is already running.
    pub(crate) fn start_round(
        &mut self,
        fixed: Option<u64>,
        random: impl FnOnce() -> u64,
    ) -> bool {
        if self.round.is_some() {
            log::debug!("round already running, start ignored");
            return false;
        }

        let seed = round_seed(fixed, self.rounds_started, random);
        self.rounds_started += 1;
        log::debug!("round {} seed: {}", self.rounds_started, seed);

        self.round = Some(game::ShuffleEngine::from_seed(seed));
        true
    }

    pub(crate) fn advance(&mut self) -> game::AdvanceOutcome {
        let Some(round) = self.round.as_mut() else {
            return game::AdvanceOutcome::NoChange;
        };

        let outcome = round.advance();
        if outcome == game::AdvanceOutcome::RoundEnded {
            self.round = None;
        }
        outcome
    }

    /// Forwards a guess and records the result, `true` when one was recorded.
    pub(crate) fn guess(&mut self, slot: game::Slot) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };

        match round.guess(slot) {
            Ok(outcome) => match outcome.won() {
                Some(won) => {
                    self.score.record(won);
                    true
                }
                None => false,
            },
            Err(err) => {
                log::warn!("guess at slot {} rejected: {}", slot, err);
                false
            }
        }
    }

    /// Clears the statistics and aborts the running round, if any.
    pub(crate) fn reset(&mut self) {
        if self.round.take().is_some() {
            log::debug!("round aborted by statistics reset");
        }
        self.score.reset();
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    show_help: bool,
    theme: Option<Theme>,
    /// The one timer driving the round; dropping it cancels the pending step.
    pending: Option<Timeout>,
    _help_timeout: Timeout,
}

impl GameView {
    fn schedule_next(&mut self, ctx: &Context<Self>) {
        self.pending = self.session.next_delay().map(|delay| {
            let link = ctx.link().clone();
            Timeout::new(timer_millis(delay), move || link.send_message(Msg::Advance))
        });
    }

    fn start_round(&mut self, ctx: &Context<Self>) -> bool {
        if !self.session.start_round(ctx.props().seed, js_random_seed) {
            return false;
        }
        self.show_help = false;
        self.schedule_next(ctx);
        true
    }

    fn advance_round(&mut self, ctx: &Context<Self>) -> bool {
        match self.session.advance() {
            game::AdvanceOutcome::NoChange => false,
            game::AdvanceOutcome::Updated => {
                self.schedule_next(ctx);
                true
            }
            game::AdvanceOutcome::RoundEnded => {
                self.pending = None;
                true
            }
        }
    }

    fn guess(&mut self, ctx: &Context<Self>, slot: game::Slot) -> bool {
        if !self.session.guess(slot) {
            return false;
        }
        self.schedule_next(ctx);
        true
    }

    fn reset_stats(&mut self) -> bool {
        self.session.reset();
        self.pending = None;
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            session: Default::default(),
            show_help: true,
            theme: Theme::init(),
            pending: None,
            _help_timeout: Timeout::new(HELP_AUTO_HIDE_MS, move || {
                link.send_message(Msg::HideHelp)
            }),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            StartRound => self.start_round(ctx),
            Advance => self.advance_round(ctx),
            Guess(slot) => self.guess(ctx, slot),
            ResetStats => self.reset_stats(),
            ToggleHelp => {
                self.show_help = !self.show_help;
                true
            }
            HideHelp => std::mem::replace(&mut self.show_help, false),
            CycleTheme => {
                self.theme = Theme::cycle(self.theme);
                Theme::apply(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let link = ctx.link();
        let on_toggle_help = link.callback(|_| ToggleHelp);
        let on_cycle_theme = link.callback(|_| CycleTheme);
        let on_guess = link.callback(Guess);
        let cb_start = link.callback(|_: MouseEvent| StartRound);
        let cb_reset = link.callback(|_: MouseEvent| ResetStats);

        let main = match self.session.round() {
            Some(round) => html! {
                <RoundView snapshot={round.snapshot()} {on_guess}/>
            },
            None => html! {
                <div class="start">
                    <button onclick={cb_start}>{"🎮 Start Game"}</button>
                </div>
            },
        };

        html! {
            <div class="shellgame">
                <header>
                    <h1>{"🎪 Shell Game"}</h1>
                    <p>{"Find the coin under the shuffling cups!"}</p>
                </header>
                <ControlsView
                    show_help={self.show_help}
                    theme={self.theme}
                    {on_toggle_help}
                    {on_cycle_theme}
                />
                if self.show_help {
                    <HelpView/>
                }
                <StatsView score={*self.session.score()}/>
                <main>{main}</main>
                <p class="mobile-hint">{"💡 Tap a cup to make your guess"}</p>
                if self.session.score().has_played() {
                    <footer>
                        <button class="reset" onclick={cb_reset}>{"🔄 Reset Statistics"}</button>
                    </footer>
                }
            </div>
        }
    }
}
