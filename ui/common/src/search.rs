use crate::{
    events::{Emitter, Subscription},
    map::{Bounds, MapSurface, PinEvent},
    markers::MarkerRenderer,
    record::{MovieRecord, Position},
    settings::{SelectionView, Settings, SuggestionSource},
};

/// Notifications for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Suggestions(Vec<String>),
    SuggestionsHidden,
    NoMatch(String),
    Focused(Position),
    Fitted(Bounds),
}

/// What a search pass did to the map.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty and the whole dataset is shown.
    All { shown: usize },
    Matched { matched: usize, shown: usize },
    NoMatch,
}

/// Filters the dataset by title and keeps the map and the suggestion list in step
/// with the search box.
pub struct SearchController<M: MapSurface> {
    records: Vec<MovieRecord>,
    folded_titles: Vec<String>,
    renderer: MarkerRenderer<M>,
    max_suggestions: usize,
    suggestion_source: SuggestionSource,
    focus_zoom: f64,
    selection_view: SelectionView,
    query: String,
    suggestions: Vec<String>,
    suggestions_visible: bool,
    events: Emitter<SearchEvent>,
}

impl<M: MapSurface> SearchController<M> {
    pub fn new(records: Vec<MovieRecord>, map: M, settings: &Settings) -> Self {
        let folded_titles = records.iter().map(|r| r.title.to_lowercase()).collect();
        Self {
            records,
            folded_titles,
            renderer: MarkerRenderer::new(map, settings.popup_trigger),
            max_suggestions: settings.max_suggestions,
            suggestion_source: settings.suggestion_source,
            focus_zoom: settings.focus_zoom,
            selection_view: settings.selection_view,
            query: String::new(),
            suggestions: vec![],
            suggestions_visible: false,
            events: Emitter::new(),
        }
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&SearchEvent) + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Draws every record. Called once the dataset is loaded.
    pub fn show_all(&mut self) -> SearchOutcome {
        self.renderer.render(&self.records);
        self.hide_suggestions();
        SearchOutcome::All {
            shown: self.renderer.markers().len(),
        }
    }

    /// Handles a change of the search box text.
    pub fn input(&mut self, text: &str) -> SearchOutcome {
        self.query = text.to_string();
        self.search()
    }

    /// Runs the current query again, as the search button does.
    pub fn submit(&mut self) -> SearchOutcome {
        self.search()
    }

    fn search(&mut self) -> SearchOutcome {
        let needle = self.query.trim().to_lowercase();
        log::debug!("Search text: `{needle}`");

        if needle.is_empty() {
            return self.show_all();
        }

        let matched: Vec<&MovieRecord> = self
            .records
            .iter()
            .zip(&self.folded_titles)
            .filter(|(_, title)| title.contains(&needle))
            .map(|(record, _)| record)
            .collect();
        log::debug!("{} movies match `{needle}`", matched.len());

        self.renderer.render(matched.iter().copied());
        let shown = self.renderer.markers().len();

        if matched.is_empty() {
            self.hide_suggestions();
            self.events.emit(&SearchEvent::NoMatch(self.query.clone()));
            return SearchOutcome::NoMatch;
        }

        let sources = matched.iter().filter(|record| match self.suggestion_source {
            SuggestionSource::AllMatches => true,
            SuggestionSource::RenderableOnly => record.is_renderable(),
        });
        let titles = distinct_titles(sources.map(|r| r.title.as_str()), self.max_suggestions);
        let count = matched.len();

        if titles.is_empty() {
            self.hide_suggestions();
        } else {
            self.show_suggestions(titles);
        }

        SearchOutcome::Matched {
            matched: count,
            shown,
        }
    }

    /// Narrows the map to every location of `title` and moves the view onto them,
    /// either centred on the first one or fitted around all of them.
    ///
    /// Returns the first selected position that could be placed on the map.
    pub fn select_suggestion(&mut self, title: &str) -> Option<Position> {
        self.query = title.to_string();
        let folded = title.to_lowercase();

        let selected: Vec<&MovieRecord> = self
            .records
            .iter()
            .zip(&self.folded_titles)
            .filter(|(_, t)| **t == folded)
            .map(|(record, _)| record)
            .collect();
        log::debug!("Selected {} locations of `{title}`", selected.len());

        self.renderer.render(selected.iter().copied());
        let positions: Vec<Position> = selected.iter().filter_map(|r| r.position()).collect();
        self.hide_suggestions();

        let Some(&first) = positions.first() else {
            log::warn!("No location of `{title}` can be shown on the map");
            return None;
        };

        match (self.selection_view, Bounds::enclosing(positions)) {
            (SelectionView::Fit, Some(bounds)) if !bounds.is_point() => {
                self.renderer.fit(bounds);
                self.events.emit(&SearchEvent::Fitted(bounds));
            }
            _ => {
                self.renderer.focus(first, self.focus_zoom);
                self.events.emit(&SearchEvent::Focused(first));
            }
        }
        Some(first)
    }

    /// A click landed outside the search box and the suggestion list.
    pub fn dismiss_suggestions(&mut self) {
        self.hide_suggestions();
    }

    pub fn handle_pin_event(&mut self, event: PinEvent) {
        self.renderer.handle_pin_event(event);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The visible suggestion list, `None` while it is hidden.
    pub fn suggestions(&self) -> Option<&[String]> {
        self.suggestions_visible.then_some(self.suggestions.as_slice())
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn renderer(&self) -> &MarkerRenderer<M> {
        &self.renderer
    }

    fn show_suggestions(&mut self, titles: Vec<String>) {
        self.suggestions = titles;
        self.suggestions_visible = true;
        self.events
            .emit(&SearchEvent::Suggestions(self.suggestions.clone()));
    }

    fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
        self.events.emit(&SearchEvent::SuggestionsHidden);
    }
}

/// Distinct titles in first-seen order, at most `limit` of them.
pub fn distinct_titles<'a>(titles: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut distinct: Vec<String> = vec![];
    for title in titles {
        if distinct.len() == limit {
            break;
        }
        if !distinct.iter().any(|t| t == title) {
            distinct.push(title.to_string());
        }
    }
    distinct
}
