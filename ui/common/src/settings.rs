use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{popup::PopupTrigger, record::Position};

pub const DEFAULT_DATA_URL: &str = "data.json";
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Which matched records contribute titles to the suggestion list.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionSource {
    /// Every title match, including records that cannot be placed on the map.
    #[default]
    AllMatches,
    /// Only matches that also have valid coordinates.
    RenderableOnly,
}

/// How the view moves when a suggestion is picked.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionView {
    /// Centre on the first placeable location at the focus zoom.
    #[default]
    Focus,
    /// Fit the view around every placeable location of the title.
    Fit,
}

impl SelectionView {
    pub fn to_str<'a>(&self) -> &'a str {
        match self {
            SelectionView::Focus => "focus",
            SelectionView::Fit => "fit",
        }
    }
}

impl fmt::Display for SelectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for SelectionView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "focus" => Ok(SelectionView::Focus),
            "fit" => Ok(SelectionView::Fit),
            other => anyhow::bail!("Unknown selection view `{other}`, expected `focus` or `fit`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub data_url: String,
    pub tile_url: String,
    pub center: Position,
    pub zoom: f64,
    /// Zoom used when a suggestion is picked.
    pub focus_zoom: f64,
    pub popup_trigger: PopupTrigger,
    pub selection_view: SelectionView,
    pub max_suggestions: usize,
    pub suggestion_source: SuggestionSource,
    pub alert_on_no_match: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            // San Francisco
            center: Position::new(37.7749, -122.4194),
            zoom: 12.0,
            focus_zoom: 15.0,
            popup_trigger: PopupTrigger::default(),
            selection_view: SelectionView::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            suggestion_source: SuggestionSource::default(),
            alert_on_no_match: false,
        }
    }
}

impl Settings {
    /// Default settings with page options applied.
    ///
    /// `options` are already decoded key/value pairs from the page URL.
    /// `popupTrigger` and `selectionView` are recognised; anything else, and
    /// invalid values, are logged and ignored.
    pub fn from_options<'a>(options: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut settings = Self::default();

        for (key, value) in options {
            match key {
                "popupTrigger" => match value.parse::<PopupTrigger>() {
                    Ok(trigger) => settings.popup_trigger = trigger,
                    Err(e) => {
                        log::warn!("{e}");
                        log::info!("Using default popup trigger `{}`", settings.popup_trigger);
                    }
                },
                "selectionView" => match value.parse::<SelectionView>() {
                    Ok(view) => settings.selection_view = view,
                    Err(e) => {
                        log::warn!("{e}");
                        log::info!("Using default selection view `{}`", settings.selection_view);
                    }
                },
                other => log::warn!("Ignoring unknown page option `{other}`"),
            }
        }

        settings
    }
}
