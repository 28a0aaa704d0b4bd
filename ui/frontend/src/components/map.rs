use film_common::Settings;
use leptos::*;
use leptos_leaflet::*;

const ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// The Leaflet map. Pins are managed imperatively through `set_map`.
#[component]
pub fn FilmMap(settings: Settings, set_map: WriteSignal<Option<leaflet::Map>>) -> impl IntoView {
    let center = Position::new(settings.center.lat, settings.center.lng);

    view! {
          <MapContainer style="height: calc(100vh - 4rem)" center=center zoom=settings.zoom set_view=true map=set_map class="z-0">
              <TileLayer url=settings.tile_url attribution=ATTRIBUTION/>
         </MapContainer>
    }
}
