use shellgame_core::Scoreboard;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum StreakTier {
    Cold,
    Warm,
    Hot,
    Rocket,
    Crown,
}

impl StreakTier {
    const fn from_streak(streak: u32) -> Self {
        match streak {
            0 => Self::Cold,
            1..3 => Self::Warm,
            3..5 => Self::Hot,
            5..8 => Self::Rocket,
            8.. => Self::Crown,
        }
    }

    const fn emoji(self) -> &'static str {
        use StreakTier::*;
        match self {
            Cold => "😐",
            Warm => "😊",
            Hot => "🔥",
            Rocket => "🚀",
            Crown => "👑",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum WinRateTier {
    Untested,
    Unlucky,
    Fair,
    Sharp,
    Hot,
    Champion,
}

impl WinRateTier {
    const fn from_percent(percent: u32) -> Self {
        match percent {
            0 => Self::Untested,
            1..30 => Self::Unlucky,
            30..50 => Self::Fair,
            50..70 => Self::Sharp,
            70..90 => Self::Hot,
            90.. => Self::Champion,
        }
    }

    const fn emoji(self) -> &'static str {
        use WinRateTier::*;
        match self {
            Untested => "🎲",
            Unlucky => "😅",
            Fair => "😊",
            Sharp => "😎",
            Hot => "🔥",
            Champion => "🏆",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct StatsProps {
    pub score: Scoreboard,
}

#[function_component(StatsView)]
pub(crate) fn stats_component(props: &StatsProps) -> Html {
    let score = props.score;
    let streak_emoji = StreakTier::from_streak(score.current_streak).emoji();

    let fourth = if score.has_played() {
        let percent = score.win_rate_percent();
        html! {
            <article class="rate">
                <strong>{format!("{}%", percent)}</strong>
                <small>{format!("{} Win Rate", WinRateTier::from_percent(percent).emoji())}</small>
            </article>
        }
    } else {
        html! {
            <article class="best">
                <strong>{score.best_streak.to_string()}</strong>
                <small>{"🏆 Best Streak"}</small>
            </article>
        }
    };

    html! {
        <section class="stats">
            <article class="wins">
                <strong>{score.wins.to_string()}</strong>
                <small>{"🎯 Wins"}</small>
            </article>
            <article class="played">
                <strong>{score.games_played.to_string()}</strong>
                <small>{"🎮 Played"}</small>
            </article>
            <article class="streak">
                <strong>{score.current_streak.to_string()}</strong>
                <small>{format!("{} Streak", streak_emoji)}</small>
            </article>
            {fourth}
            if score.has_played() {
                <>
                <article class="best wide">
                    <strong>{score.best_streak.to_string()}</strong>
                    <small>{"🏆 Best Win Streak"}</small>
                </article>
                <article class="losses wide">
                    <strong>{score.losses().to_string()}</strong>
                    <small>{"💔 Losses"}</small>
                </article>
                </>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_tiers_follow_thresholds() {
        let tiers: Vec<_> = [0, 1, 2, 3, 4, 5, 7, 8, 20]
            .into_iter()
            .map(StreakTier::from_streak)
            .collect();

        use StreakTier::*;
        assert_eq!(
            tiers,
            [Cold, Warm, Warm, Hot, Hot, Rocket, Rocket, Crown, Crown]
        );
    }

    #[test]
    fn win_rate_tiers_follow_thresholds() {
        use WinRateTier::*;
        assert_eq!(WinRateTier::from_percent(0), Untested);
        assert_eq!(WinRateTier::from_percent(29), Unlucky);
        assert_eq!(WinRateTier::from_percent(30), Fair);
        assert_eq!(WinRateTier::from_percent(69), Sharp);
        assert_eq!(WinRateTier::from_percent(89), Hot);
        assert_eq!(WinRateTier::from_percent(100), Champion);
        assert_eq!(WinRateTier::from_percent(100).emoji(), "🏆");
    }
}
