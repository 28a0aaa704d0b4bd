mod error;
mod events;
mod map;
mod markers;
mod popup;
mod record;
mod search;
mod settings;

pub use error::LoadError;
pub use events::{Emitter, Subscription};
pub use map::{Bounds, MapSurface, MarkerId, PinEvent, PinEventKind};
pub use markers::{Marker, MarkerRenderer};
pub use popup::{PopupContent, PopupRow, PopupTrigger, NOT_AVAILABLE};
pub use record::{Dataset, MovieRecord, Position};
pub use search::{distinct_titles, SearchController, SearchEvent, SearchOutcome};
pub use settings::{SelectionView, Settings, SuggestionSource};
