use crate::utils::*;
use serde::{Deserialize, Serialize};

/// Explicit color scheme; `None` means follow the system preference.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Auto, then light, then dark, then back to auto.
    pub(crate) const fn cycle(theme: Option<Self>) -> Option<Self> {
        use Theme::*;
        match theme {
            None => Some(Light),
            Some(Light) => Some(Dark),
            Some(Dark) => None,
        }
    }

    pub(crate) const fn label(theme: Option<Self>) -> &'static str {
        use Theme::*;
        match theme {
            None => "Auto",
            Some(Light) => "Light",
            Some(Dark) => "Dark",
        }
    }

    fn update_html(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("no document element to theme");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to clear theme: {:?}", err);
            }
        }
    }

    /// Applies the saved preference and returns it.
    pub(crate) fn init() -> Option<Self> {
        let theme = LocalOrDefault::local_or_default();
        Self::update_html(theme);
        theme
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "shellgame:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_preference() {
        let mut theme = None;
        let mut labels = Vec::new();
        for _ in 0..3 {
            theme = Theme::cycle(theme);
            labels.push(Theme::label(theme));
        }

        assert_eq!(labels, ["Light", "Dark", "Auto"]);
        assert_eq!(theme, None);
    }
}
