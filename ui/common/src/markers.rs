use crate::{
    map::{Bounds, MapSurface, MarkerId, PinEvent, PinEventKind},
    popup::{PopupContent, PopupTrigger},
    record::{MovieRecord, Position},
};

/// A pin currently shown on the map.
#[derive(Debug)]
pub struct Marker<P> {
    pub id: MarkerId,
    pub title: String,
    pub position: Position,
    pin: P,
}

impl<P> Marker<P> {
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

/// Owns the live marker set and keeps it in sync with the records it is given.
pub struct MarkerRenderer<M: MapSurface> {
    map: M,
    trigger: PopupTrigger,
    markers: Vec<Marker<M::Pin>>,
    generation: u64,
    open: Option<MarkerId>,
}

impl<M: MapSurface> MarkerRenderer<M> {
    pub fn new(map: M, trigger: PopupTrigger) -> Self {
        Self {
            map,
            trigger,
            markers: vec![],
            generation: 0,
            open: None,
        }
    }

    /// Replaces the pins on the map with one pin per renderable record, in order.
    pub fn render<'a>(&mut self, records: impl IntoIterator<Item = &'a MovieRecord>) {
        self.clear();
        self.generation += 1;

        for record in records {
            let Some(position) = record.position() else {
                log::warn!(
                    "Skipping movie `{}`: invalid coordinates ({:?}, {:?})",
                    record.title,
                    record.lat,
                    record.lng
                );
                continue;
            };

            let id = MarkerId {
                generation: self.generation,
                index: self.markers.len(),
            };
            let popup = PopupContent::from_record(record);
            let pin = self
                .map
                .place_pin(id, position, &record.title, &popup, self.trigger);

            self.markers.push(Marker {
                id,
                title: record.title.clone(),
                position,
                pin,
            });
        }

        log::debug!("Rendered {} markers", self.markers.len());
    }

    /// Removes every pin. Safe to call when nothing is shown.
    pub fn clear(&mut self) {
        self.close_popup();
        for marker in self.markers.drain(..) {
            self.map.remove_pin(marker.pin);
        }
    }

    pub fn handle_pin_event(&mut self, event: PinEvent) {
        if self.index_of(event.marker).is_none() {
            log::warn!("Ignoring event for stale marker {:?}", event.marker);
            return;
        }
        let id = event.marker;

        match event.kind {
            PinEventKind::Activate => self.open_popup(id),
            PinEventKind::Leave => {
                if self.trigger == PopupTrigger::Hover && self.open == Some(id) {
                    self.close_popup();
                }
            }
        }
    }

    pub fn open_popup(&mut self, id: MarkerId) {
        if self.open.is_some_and(|open| open != id) {
            self.close_popup();
        }

        let Some(index) = self.index_of(id) else {
            log::warn!("Cannot open popup of unknown marker {id:?}");
            return;
        };
        self.map.show_popup(&self.markers[index].pin);
        self.open = Some(id);
    }

    pub fn close_popup(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        if let Some(marker) = self.markers.iter().find(|m| m.id == open) {
            self.map.hide_popup(&marker.pin);
        }
    }

    pub fn focus(&mut self, center: Position, zoom: f64) {
        self.map.set_view(center, zoom);
    }

    pub fn fit(&mut self, bounds: Bounds) {
        self.map.fit_bounds(bounds);
    }

    pub fn markers(&self) -> &[Marker<M::Pin>] {
        &self.markers
    }

    pub fn open_marker(&self) -> Option<MarkerId> {
        self.open
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    fn index_of(&self, id: MarkerId) -> Option<usize> {
        if id.generation != self.generation {
            return None;
        }
        self.markers
            .get(id.index)
            .filter(|m| m.id == id)
            .map(|_| id.index)
    }
}
