#![allow(dead_code)]

use film_common::{Bounds, MapSurface, MarkerId, MovieRecord, PopupContent, PopupTrigger, Position};

/// Everything the renderer asked the map to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Place(MarkerId, String),
    Remove(MarkerId),
    Show(MarkerId),
    Hide(MarkerId),
    View(Position, f64),
    Fit(Bounds),
}

#[derive(Debug, Clone)]
pub struct FakePin {
    pub id: MarkerId,
    pub label: String,
    pub position: Position,
    pub popup: PopupContent,
    pub trigger: PopupTrigger,
}

/// In-memory map surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub ops: Vec<Op>,
    pub live: Vec<(MarkerId, String)>,
    pub open_popups: Vec<MarkerId>,
    pub view: Option<(Position, f64)>,
    pub fitted: Option<Bounds>,
}

impl RecordingMap {
    pub fn live_titles(&self) -> Vec<String> {
        self.live.iter().map(|(_, title)| title.clone()).collect()
    }
}

impl MapSurface for RecordingMap {
    type Pin = FakePin;

    fn place_pin(
        &mut self,
        id: MarkerId,
        position: Position,
        label: &str,
        popup: &PopupContent,
        trigger: PopupTrigger,
    ) -> FakePin {
        self.ops.push(Op::Place(id, label.to_string()));
        self.live.push((id, label.to_string()));
        FakePin {
            id,
            label: label.to_string(),
            position,
            popup: popup.clone(),
            trigger,
        }
    }

    fn remove_pin(&mut self, pin: FakePin) {
        self.ops.push(Op::Remove(pin.id));
        self.live.retain(|(id, _)| *id != pin.id);
        self.open_popups.retain(|id| *id != pin.id);
    }

    fn show_popup(&mut self, pin: &FakePin) {
        self.ops.push(Op::Show(pin.id));
        self.open_popups.push(pin.id);
    }

    fn hide_popup(&mut self, pin: &FakePin) {
        self.ops.push(Op::Hide(pin.id));
        self.open_popups.retain(|id| *id != pin.id);
    }

    fn set_view(&mut self, center: Position, zoom: f64) {
        self.ops.push(Op::View(center, zoom));
        self.view = Some((center, zoom));
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.ops.push(Op::Fit(bounds));
        self.fitted = Some(bounds);
    }
}

pub fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record(title: &str, lat: &str, lng: &str) -> MovieRecord {
    MovieRecord::new(title, lat, lng)
}

/// Two renderable Vertigo locations, an unplaceable Rock, and a few others.
pub fn sample_records() -> Vec<MovieRecord> {
    vec![
        record("Vertigo", "37.80", "-122.41"),
        record("The Rock", "abc", "-122.4"),
        record("The Conversation", "37.79", "-122.40"),
        record("Vertigo", "37.76", "-122.45"),
        record("The Rock", "37.82", "-122.42"),
        record("Bullitt", "37.79", "-122.41"),
        record("Dirty Harry", "", "-122.41"),
    ]
}
