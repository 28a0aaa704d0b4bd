use film_common::{MovieRecord, Settings};
use leptos::*;
use leptos_leaflet::leaflet;
use leptos_router::{use_query_map, ParamsMap};

use crate::{
    alert_user,
    components::{map::FilmMap, search_box::SearchBox},
    explorer::Explorer,
    leaflet_map::LeafletSurface,
    loader::load_dataset,
};

const LOAD_FAILED_MESSAGE: &str = "Failed to load movie data. Please try again later.";

/// Settings for the page URL's already decoded query options.
pub fn page_settings(query: &ParamsMap) -> Settings {
    Settings::from_options(query.0.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

#[component]
pub fn Home() -> impl IntoView {
    let settings = page_settings(&use_query_map().get_untracked());
    log::info!(
        "Popup trigger: {}, selection view: {}",
        settings.popup_trigger,
        settings.selection_view
    );

    let explorer: Explorer = Explorer::new(settings.clone());
    let (map, set_map) = create_signal(None::<leaflet::Map>);
    let (records, set_records) = create_signal(None::<Vec<MovieRecord>>);

    let data_url = settings.data_url.clone();
    spawn_local(async move {
        match load_dataset(&data_url).await {
            Ok(r) => set_records.set(Some(r)),
            Err(e) => {
                log::error!("Error loading movie data: {e}");
                alert_user(LOAD_FAILED_MESSAGE);
            }
        }
    });

    // Draw once both the map and the dataset are available
    let attach = explorer.clone();
    create_effect(move |attached: Option<bool>| {
        if attached == Some(true) {
            return true;
        }
        let (Some(map), Some(records)) = (map.get(), records.get()) else {
            return false;
        };
        attach.attach(LeafletSurface::new(map, attach.pin_events()), records);
        true
    });

    view! {
        <div>
            <SearchBox explorer=explorer/>
            <FilmMap settings=settings set_map=set_map/>
        </div>
    }
}
