pub mod common;

use film_common::{MarkerRenderer, MovieRecord, PinEvent, PopupTrigger};
use rand::Rng;

use crate::common::{init_log, record, sample_records, Op, RecordingMap};

fn titles(renderer: &MarkerRenderer<RecordingMap>) -> Vec<String> {
    renderer.markers().iter().map(|m| m.title.clone()).collect()
}

#[test]
fn renders_one_marker_per_renderable_record_in_order() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());

    let expected = vec!["Vertigo", "The Conversation", "Vertigo", "The Rock", "Bullitt"];
    assert_eq!(titles(&renderer), expected);
    assert_eq!(renderer.map().live_titles(), expected);
}

#[test]
fn spec_example_shows_only_vertigo() {
    init_log();

    let records = vec![
        record("Vertigo", "37.80", "-122.41"),
        record("The Rock", "abc", "-122.4"),
    ];
    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&records);

    assert_eq!(renderer.map().live_titles(), vec!["Vertigo"]);
    let position = renderer.markers()[0].position;
    assert_eq!((position.lat, position.lng), (37.8, -122.41));
}

#[test]
fn empty_input_clears_the_map() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());
    renderer.render(&Vec::<MovieRecord>::new());

    assert!(renderer.markers().is_empty());
    assert!(renderer.map().live.is_empty());

    // Clearing an empty map is a no-op
    let ops_before = renderer.map().ops.len();
    renderer.clear();
    assert_eq!(renderer.map().ops.len(), ops_before);
}

#[test]
fn removes_old_pins_before_placing_new_ones() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());
    let first_pass = renderer.map().ops.len();
    renderer.render(&sample_records());

    let second_pass = &renderer.map().ops[first_pass..];
    let first_place = second_pass
        .iter()
        .position(|op| matches!(op, Op::Place(..)))
        .unwrap();
    assert!(second_pass[..first_place]
        .iter()
        .all(|op| matches!(op, Op::Remove(_))));
    assert_eq!(first_place, 5);
}

#[test]
fn rendering_twice_matches_rendering_once() {
    init_log();

    let mut once = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    once.render(&sample_records());

    let mut twice = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    twice.render(&sample_records());
    twice.render(&sample_records());

    assert_eq!(once.map().live_titles(), twice.map().live_titles());
    assert_eq!(titles(&once), titles(&twice));
}

#[test]
fn duplicate_titles_get_independent_markers() {
    init_log();

    let records = vec![
        record("Vertigo", "37.80", "-122.41"),
        record("Vertigo", "37.80", "-122.41"),
    ];
    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&records);

    let markers = renderer.markers();
    assert_eq!(markers.len(), 2);
    assert_ne!(markers[0].id, markers[1].id);
}

#[test]
fn click_opens_one_popup_at_a_time() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());
    let first = renderer.markers()[0].id;
    let second = renderer.markers()[1].id;

    renderer.handle_pin_event(PinEvent::activate(first));
    assert_eq!(renderer.map().open_popups, vec![first]);

    renderer.handle_pin_event(PinEvent::activate(second));
    assert_eq!(renderer.map().open_popups, vec![second]);
    assert_eq!(renderer.open_marker(), Some(second));

    // Leaving a marker does nothing in click mode
    renderer.handle_pin_event(PinEvent::leave(second));
    assert_eq!(renderer.map().open_popups, vec![second]);
}

#[test]
fn hover_closes_popup_on_leave() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Hover);
    renderer.render(&sample_records());
    let first = renderer.markers()[0].id;
    let second = renderer.markers()[1].id;

    renderer.handle_pin_event(PinEvent::activate(first));
    renderer.handle_pin_event(PinEvent::leave(second));
    assert_eq!(renderer.map().open_popups, vec![first]);

    renderer.handle_pin_event(PinEvent::leave(first));
    assert!(renderer.map().open_popups.is_empty());
    assert_eq!(renderer.open_marker(), None);
}

#[test]
fn pins_carry_trigger_and_popup() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Hover);
    renderer.render(&sample_records());

    let pin = renderer.markers()[0].pin();
    assert_eq!(pin.trigger, PopupTrigger::Hover);
    assert_eq!(pin.popup.title, "Vertigo");
    assert_eq!(pin.label, "Vertigo");
}

#[test]
fn events_from_previous_render_are_ignored() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());
    let stale = renderer.markers()[0].id;
    renderer.render(&sample_records());

    renderer.handle_pin_event(PinEvent::activate(stale));
    assert!(renderer.map().open_popups.is_empty());
    assert_eq!(renderer.open_marker(), None);
}

#[test]
fn rerender_closes_open_popup() {
    init_log();

    let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
    renderer.render(&sample_records());
    let first = renderer.markers()[0].id;
    renderer.handle_pin_event(PinEvent::activate(first));

    renderer.render(&sample_records());
    assert_eq!(renderer.open_marker(), None);
    assert!(renderer.map().ops.contains(&Op::Hide(first)));
}

#[test]
fn random_datasets_render_exactly_their_renderable_records() {
    init_log();

    let mut rng = rand::thread_rng();
    let coords = ["37.7", "-122.4", "0", "abc", "", " 12.5 ", "NaN", "1e400"];

    for _ in 0..200 {
        let len = rng.gen_range(0..30);
        let records: Vec<MovieRecord> = (0..len)
            .map(|i| {
                let mut r = record(
                    &format!("Movie {}", rng.gen_range(0..5)),
                    coords[rng.gen_range(0..coords.len())],
                    coords[rng.gen_range(0..coords.len())],
                );
                if rng.gen_bool(0.1) {
                    r.lat = None;
                }
                r.director = Some(format!("Director {i}"));
                r
            })
            .collect();

        let mut renderer = MarkerRenderer::new(RecordingMap::default(), PopupTrigger::Click);
        renderer.render(&records);

        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.is_renderable())
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles(&renderer), expected);
        assert_eq!(renderer.map().live_titles(), expected);

        let directors: Vec<_> = renderer
            .markers()
            .iter()
            .map(|m| m.pin().popup.value("Director").unwrap().to_string())
            .collect();
        let expected_directors: Vec<_> = records
            .iter()
            .filter(|r| r.is_renderable())
            .map(|r| r.director.clone().unwrap())
            .collect();
        assert_eq!(directors, expected_directors);
    }
}
