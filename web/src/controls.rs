use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ControlsProps {
    pub show_help: bool,
    pub theme: Option<Theme>,
    pub on_toggle_help: Callback<()>,
    pub on_cycle_theme: Callback<()>,
}

/// The compact box only has room for the emoji.
const fn help_button_label(show_help: bool, compact: bool) -> &'static str {
    match (show_help, compact) {
        (true, false) => "🙈 Hide Help",
        (false, false) => "💡 Show Help",
        (true, true) => "🙈",
        (false, true) => "💡",
    }
}

#[function_component(ControlsView)]
pub(crate) fn controls_component(props: &ControlsProps) -> Html {
    let ControlsProps {
        show_help,
        theme,
        on_toggle_help,
        on_cycle_theme,
    } = props.clone();

    let onclick_help = on_toggle_help.reform(|_: MouseEvent| ());
    let onclick_theme = on_cycle_theme.reform(|_: MouseEvent| ());

    html! {
        <>
            <aside class="controls desktop">
                <strong>{"🎮 Controls"}</strong>
                <ul>
                    <li>{"🖱️ Click cup to guess"}</li>
                    <li>{"👀 Track the coin"}</li>
                    <li>{"🎯 Find the coin"}</li>
                </ul>
                <button onclick={onclick_help.clone()}>{help_button_label(show_help, false)}</button>
                <button onclick={onclick_theme}>{format!("🎨 {}", Theme::label(theme))}</button>
            </aside>
            <aside class="controls compact">
                <strong>{"📱 Controls"}</strong>
                <ul>
                    <li>{"👆 Tap cup to guess"}</li>
                    <li>{"👀 Watch carefully"}</li>
                </ul>
                <button onclick={onclick_help}>{help_button_label(show_help, true)}</button>
            </aside>
        </>
    }
}

#[function_component(HelpView)]
pub(crate) fn help_component() -> Html {
    html! {
        <article class="help">
            <h3>{"🎯 How to Play"}</h3>
            <ul>
                <li>{"Watch as the coin is placed under a random cup"}</li>
                <li>{"Follow the cups as they shuffle quickly"}</li>
                <li>{"Click the cup you think has the coin"}</li>
                <li>{"Build up your winning streak!"}</li>
            </ul>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_help_button_keeps_only_the_emoji() {
        assert_eq!(help_button_label(false, false), "💡 Show Help");
        assert_eq!(help_button_label(true, false), "🙈 Hide Help");
        assert_eq!(help_button_label(false, true), "💡");
        assert_eq!(help_button_label(true, true), "🙈");
    }
}
