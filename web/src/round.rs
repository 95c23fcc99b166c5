use shellgame_core::{Cup, Phase, RoundSnapshot, Slot};
use yew::prelude::*;

/// Horizontal distance between two neighboring slots.
const SLOT_SPACING_PX: i32 = 140;

pub(crate) fn headline(snapshot: &RoundSnapshot) -> String {
    use Phase::*;
    match (snapshot.phase, snapshot.won) {
        (Placing, _) => "🪙 Here's the coin!".to_string(),
        (Shuffling, _) => "👀 Watch carefully...".to_string(),
        (Guessing, _) => "🤔 Where is the coin?".to_string(),
        (Revealing, Some(true)) => "🎉 Correct! You found the coin!".to_string(),
        (Revealing, _) => match snapshot.coin_slot {
            Some(slot) => format!("❌ Wrong! The coin was under cup {}.", slot + 1),
            None => "❌ Wrong!".to_string(),
        },
    }
}

pub(crate) const fn instruction(phase: Phase) -> &'static str {
    use Phase::*;
    match phase {
        Placing => "The coin is being placed under a cup...",
        Shuffling => "Follow the cups carefully as they move around!",
        Guessing => "Click on the cup you think has the coin!",
        Revealing => "Game over! Starting a new round...",
    }
}

const fn slot_offset(slot: Slot) -> i32 {
    (slot as i32 - 1) * SLOT_SPACING_PX
}

#[derive(Properties, Clone, PartialEq)]
struct CupProps {
    cup: Cup,
    #[prop_or_default]
    has_coin: bool,
    /// Set on the picked cup once revealed, `true` when it held the coin.
    #[prop_or_default]
    picked: Option<bool>,
    #[prop_or_default]
    show_label: bool,
    callback: Callback<Slot>,
}

#[function_component(CupView)]
fn cup_component(props: &CupProps) -> Html {
    let CupProps {
        cup,
        has_coin,
        picked,
        show_label,
        callback,
    } = props.clone();

    let class = classes!(
        "cup",
        match picked {
            Some(true) => classes!("picked", "right"),
            Some(false) => classes!("picked", "wrong"),
            None => classes!(),
        }
    );
    let style = format!("transform: translateX({}px);", slot_offset(cup.slot));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cup {} clicked at slot {}", cup.id, cup.slot);
        callback.emit(cup.slot);
    });

    html! {
        <div {class} {style} {onclick}>
            <div class="shell"/>
            if has_coin {
                <div class="coin">{"¢"}</div>
            }
            if show_label {
                <span class="label">{(cup.slot + 1).to_string()}</span>
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RoundProps {
    pub snapshot: RoundSnapshot,
    pub on_guess: Callback<Slot>,
}

#[function_component(RoundView)]
pub(crate) fn round_component(props: &RoundProps) -> Html {
    let RoundProps { snapshot, on_guess } = props.clone();
    let phase = snapshot.phase;

    let progress = snapshot.progress.map(|progress| {
        html! {
            <div class="progress">
                <p>{format!("Shuffle {} of {}", progress.step, progress.total)}</p>
                <progress value={progress.step.to_string()} max={progress.total.to_string()}/>
            </div>
        }
    });

    // keyed by identity so each cup keeps its DOM node and slides between slots
    let mut cups: Vec<Cup> = snapshot.cups.iter().collect();
    cups.sort_by_key(|cup| cup.id);

    let table_class = classes!(
        "table",
        phase.accepts_guess().then_some("playable"),
        matches!(phase, Phase::Shuffling).then_some("shuffling"),
    );

    html! {
        <section class="round">
            <h2>{headline(&snapshot)}</h2>
            {for progress}
            <div class={table_class}>
                {
                    for cups.into_iter().map(|cup| {
                        let has_coin = snapshot.coin_slot == Some(cup.slot);
                        let picked = (snapshot.selected_slot == Some(cup.slot))
                            .then_some(has_coin);
                        let show_label = phase.is_finished();
                        html! {
                            <CupView
                                key={cup.id.to_string()}
                                {cup}
                                {has_coin}
                                {picked}
                                {show_label}
                                callback={on_guess.clone()}
                            />
                        }
                    })
                }
            </div>
            <p class="instruction">{instruction(phase)}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellgame_core::{CupLayout, ShuffleProgress};

    fn snapshot(phase: Phase) -> RoundSnapshot {
        RoundSnapshot {
            cups: CupLayout::initial(),
            phase,
            coin_slot: None,
            progress: None,
            selected_slot: None,
            won: None,
        }
    }

    #[test]
    fn wrong_guess_names_the_one_based_coin_slot() {
        let snapshot = RoundSnapshot {
            coin_slot: Some(2),
            selected_slot: Some(0),
            won: Some(false),
            ..snapshot(Phase::Revealing)
        };

        assert_eq!(headline(&snapshot), "❌ Wrong! The coin was under cup 3.");
    }

    #[test]
    fn headline_tracks_phase() {
        let shuffling = RoundSnapshot {
            progress: Some(ShuffleProgress { step: 1, total: 4 }),
            ..snapshot(Phase::Shuffling)
        };

        assert_eq!(headline(&snapshot(Phase::Placing)), "🪙 Here's the coin!");
        assert_eq!(headline(&shuffling), "👀 Watch carefully...");
        assert_eq!(headline(&snapshot(Phase::Guessing)), "🤔 Where is the coin?");
        assert_eq!(
            instruction(Phase::Guessing),
            "Click on the cup you think has the coin!"
        );
    }

    #[test]
    fn slots_are_laid_out_around_the_center() {
        assert_eq!(slot_offset(0), -140);
        assert_eq!(slot_offset(1), 0);
        assert_eq!(slot_offset(2), 140);
    }
}
