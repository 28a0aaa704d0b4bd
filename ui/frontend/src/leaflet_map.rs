use film_common::{Bounds, MapSurface, MarkerId, PinEvent, PopupContent, PopupTrigger, Position};
use leptos::{SignalSet, WriteSignal};
use leptos_leaflet::leaflet::{
    LatLng, LatLngBounds, Map, Marker, MarkerOptions, Point, Popup, PopupOptions,
};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};

use crate::components::info_window::info_window;

// Places the popup tip above the default marker icon
const POPUP_OFFSET_Y: f64 = -34.0;

type Listener = Closure<dyn Fn(JsValue)>;

pub struct LeafletPin {
    marker: Marker,
    popup: Popup,
    lat_lng: LatLng,
    // Keeps the JS callbacks alive until the pin is removed
    _listeners: Vec<Listener>,
}

/// Leaflet-backed map surface.
///
/// Marker events are not handled here; they are written to `events` and picked up
/// by whoever owns the search controller.
pub struct LeafletSurface {
    map: Map,
    events: WriteSignal<Option<PinEvent>>,
}

impl LeafletSurface {
    pub fn new(map: Map, events: WriteSignal<Option<PinEvent>>) -> Self {
        Self { map, events }
    }

    fn listen(&self, marker: &Marker, kind: &str, event: PinEvent) -> Listener {
        let events = self.events;
        let listener = Closure::<dyn Fn(JsValue)>::new(move |_| events.set(Some(event)));
        marker.on(kind, listener.as_ref());
        listener
    }
}

fn lat_lng(position: Position) -> LatLng {
    LatLng::new(position.lat, position.lng)
}

impl MapSurface for LeafletSurface {
    type Pin = LeafletPin;

    fn place_pin(
        &mut self,
        id: MarkerId,
        position: Position,
        label: &str,
        popup: &PopupContent,
        trigger: PopupTrigger,
    ) -> LeafletPin {
        let lat_lng = lat_lng(position);

        let options = MarkerOptions::new();
        options.set_title(label.to_string());
        let marker = Marker::new_with_options(&lat_lng, &options);
        marker.add_to(&self.map);

        let popup_options = PopupOptions::new();
        popup_options.set_offset(Point::new(0.0, POPUP_OFFSET_Y));
        let leaflet_popup = Popup::new(&popup_options, None);
        let content = info_window(popup);
        leaflet_popup.set_content(content.unchecked_ref());

        let listeners = match trigger {
            PopupTrigger::Click => vec![self.listen(&marker, "click", PinEvent::activate(id))],
            PopupTrigger::Hover => vec![
                self.listen(&marker, "mouseover", PinEvent::activate(id)),
                self.listen(&marker, "mouseout", PinEvent::leave(id)),
            ],
        };

        LeafletPin {
            marker,
            popup: leaflet_popup,
            lat_lng,
            _listeners: listeners,
        }
    }

    fn remove_pin(&mut self, pin: LeafletPin) {
        pin.popup.remove();
        pin.marker.remove();
    }

    fn show_popup(&mut self, pin: &LeafletPin) {
        pin.popup.set_lat_lng(&pin.lat_lng);
        pin.popup.open_on(&self.map);
    }

    fn hide_popup(&mut self, pin: &LeafletPin) {
        pin.popup.remove();
    }

    fn set_view(&mut self, center: Position, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        let bounds = LatLngBounds::new(&lat_lng(bounds.south_west), &lat_lng(bounds.north_east));
        self.map.fit_bounds(&bounds);
    }
}
