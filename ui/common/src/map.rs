use crate::{
    popup::{PopupContent, PopupTrigger},
    record::Position,
};

/// Identifies a marker within one render pass.
///
/// `generation` changes on every render, so events raised by pins of an earlier
/// pass can be recognised and dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinEventKind {
    /// The pin's trigger fired (click, or pointer enter in hover mode).
    Activate,
    /// The pointer left the pin.
    Leave,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinEvent {
    pub marker: MarkerId,
    pub kind: PinEventKind,
}

impl PinEvent {
    pub fn activate(marker: MarkerId) -> Self {
        Self {
            marker,
            kind: PinEventKind::Activate,
        }
    }

    pub fn leave(marker: MarkerId) -> Self {
        Self {
            marker,
            kind: PinEventKind::Leave,
        }
    }
}

/// Smallest lat/lng box holding a set of positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub south_west: Position,
    pub north_east: Position,
}

impl Bounds {
    /// `None` for an empty set.
    pub fn enclosing(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        let mut positions = positions.into_iter();
        let first = positions.next()?;

        Some(positions.fold(
            Self {
                south_west: first,
                north_east: first,
            },
            |bounds, p| Self {
                south_west: Position::new(
                    bounds.south_west.lat.min(p.lat),
                    bounds.south_west.lng.min(p.lng),
                ),
                north_east: Position::new(
                    bounds.north_east.lat.max(p.lat),
                    bounds.north_east.lng.max(p.lng),
                ),
            },
        ))
    }

    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}

/// The capabilities the renderer needs from a mapping widget.
pub trait MapSurface {
    /// Widget-side handle of a placed pin. Dropping it must not leave the pin on
    /// the map; [`MapSurface::remove_pin`] is always called first.
    type Pin;

    /// Places a pin labelled `label` and arranges for the widget to report the
    /// events matching `trigger` as [`PinEvent`]s tagged with `id`.
    fn place_pin(
        &mut self,
        id: MarkerId,
        position: Position,
        label: &str,
        popup: &PopupContent,
        trigger: PopupTrigger,
    ) -> Self::Pin;

    fn remove_pin(&mut self, pin: Self::Pin);

    fn show_popup(&mut self, pin: &Self::Pin);

    fn hide_popup(&mut self, pin: &Self::Pin);

    fn set_view(&mut self, center: Position, zoom: f64);

    fn fit_bounds(&mut self, bounds: Bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_enclose_every_position() {
        let bounds = Bounds::enclosing([
            Position::new(37.80, -122.41),
            Position::new(37.75, -122.39),
            Position::new(37.79, -122.50),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, Position::new(37.75, -122.50));
        assert_eq!(bounds.north_east, Position::new(37.80, -122.39));
        assert!(!bounds.is_point());
    }

    #[test]
    fn bounds_of_nothing_or_one_position() {
        assert_eq!(Bounds::enclosing(std::iter::empty()), None);
        assert!(Bounds::enclosing([Position::new(1.0, 2.0)])
            .unwrap()
            .is_point());
    }
}
