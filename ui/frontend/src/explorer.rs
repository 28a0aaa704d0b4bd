use std::{cell::RefCell, rc::Rc};

use film_common::{
    MapSurface, MovieRecord, PinEvent, SearchController, SearchEvent, Settings, Subscription,
};
use leptos::*;

use crate::{alert_user, leaflet_map::LeafletSurface};

const NO_MATCH_MESSAGE: &str = "No movies found with that title.";

struct Session<M: MapSurface> {
    controller: SearchController<M>,
    _subscription: Subscription,
}

/// Page-level handle on the search controller.
///
/// The controller only exists once both the map and the dataset are ready; until
/// then user input is logged and dropped.
pub struct Explorer<M: MapSurface + 'static = LeafletSurface> {
    session: Rc<RefCell<Option<Session<M>>>>,
    settings: Settings,
    pub query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    pub suggestions: ReadSignal<Vec<String>>,
    set_suggestions: WriteSignal<Vec<String>>,
    set_pin_event: WriteSignal<Option<PinEvent>>,
}

impl<M: MapSurface + 'static> Clone for Explorer<M> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            settings: self.settings.clone(),
            query: self.query,
            set_query: self.set_query,
            suggestions: self.suggestions,
            set_suggestions: self.set_suggestions,
            set_pin_event: self.set_pin_event,
        }
    }
}

impl<M: MapSurface + 'static> Explorer<M> {
    pub fn new(settings: Settings) -> Self {
        let (query, set_query) = create_signal(String::new());
        let (suggestions, set_suggestions) = create_signal(Vec::<String>::new());
        let (pin_event, set_pin_event) = create_signal(None::<PinEvent>);

        let explorer = Self {
            session: Rc::new(RefCell::new(None)),
            settings,
            query,
            set_query,
            suggestions,
            set_suggestions,
            set_pin_event,
        };

        // Marker callbacks only write the signal, the controller is borrowed here
        let dispatcher = explorer.clone();
        create_effect(move |_| {
            if let Some(event) = pin_event.get() {
                dispatcher.with_controller(|c| c.handle_pin_event(event));
            }
        });

        explorer
    }

    /// Where the map surface reports marker events.
    pub fn pin_events(&self) -> WriteSignal<Option<PinEvent>> {
        self.set_pin_event
    }

    /// Builds the controller over the loaded map and draws the whole dataset.
    pub fn attach(&self, surface: M, records: Vec<MovieRecord>) {
        let mut controller = SearchController::new(records, surface, &self.settings);

        let set_suggestions = self.set_suggestions;
        let alert_on_no_match = self.settings.alert_on_no_match;
        let subscription = controller.subscribe(move |event| match event {
            SearchEvent::Suggestions(titles) => set_suggestions.set(titles.clone()),
            SearchEvent::SuggestionsHidden => set_suggestions.set(vec![]),
            SearchEvent::NoMatch(query) => {
                log::info!("No movies found for `{query}`");
                if alert_on_no_match {
                    alert_user(NO_MATCH_MESSAGE);
                }
            }
            SearchEvent::Focused(position) => {
                log::debug!("Map centred on ({}, {})", position.lat, position.lng)
            }
            SearchEvent::Fitted(bounds) => log::debug!("Map fitted to {bounds:?}"),
        });

        controller.show_all();
        *self.session.borrow_mut() = Some(Session {
            controller,
            _subscription: subscription,
        });
    }

    pub fn input(&self, text: String) {
        self.set_query.set(text.clone());
        self.with_controller(|c| {
            c.input(&text);
        });
    }

    pub fn submit(&self) {
        log::debug!("Search button clicked");
        self.with_controller(|c| {
            c.submit();
        });
    }

    pub fn select(&self, title: String) {
        self.set_query.set(title.clone());
        self.with_controller(|c| {
            c.select_suggestion(&title);
        });
    }

    pub fn dismiss(&self) {
        self.with_controller(|c| c.dismiss_suggestions());
    }

    fn with_controller(&self, f: impl FnOnce(&mut SearchController<M>)) {
        let Ok(mut session) = self.session.try_borrow_mut() else {
            log::warn!("Search controller is busy, dropping event");
            return;
        };

        match session.as_mut() {
            Some(session) => f(&mut session.controller),
            None => log::debug!("Movie data is not loaded yet, ignoring event"),
        }
    }
}
