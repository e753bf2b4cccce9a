//! A whole scripted session: load-shaped data, scrub the slider, drag the
//! viewport, and make sure the two update paths never bleed into each other.

use chrono::NaiveDateTime;

use model::{LonLat, Model, Station, StationId, Trip};
use viewer::{Camera, Controller, ViewportChange, ANY_TIME_LABEL, NO_FILTER};

fn trip(start: &str, end: &str, started_at: &str, ended_at: &str) -> Trip {
    let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    Trip {
        start_station: StationId::new(start),
        end_station: StationId::new(end),
        started_at: parse(started_at),
        ended_at: parse(ended_at),
    }
}

fn station(id: &str, lon: f64, lat: f64) -> Station {
    Station {
        id: StationId::new(id),
        pos: LonLat::new(lon, lat),
    }
}

fn downtown_model() -> Model {
    let stations = vec![
        station("A32000", -71.0916, 42.3601),
        station("B32006", -71.0659, 42.3555),
        station("C32019", -71.1054, 42.3664),
    ];
    let trips = vec![
        // Morning commute into B.
        trip("A32000", "B32006", "2024-03-06 08:05:00", "2024-03-06 08:20:00"),
        trip("C32019", "B32006", "2024-03-06 08:31:00", "2024-03-06 08:47:00"),
        trip("A32000", "B32006", "2024-03-06 09:02:00", "2024-03-06 09:15:00"),
        // Lunch loop.
        trip("B32006", "B32006", "2024-03-06 12:20:00", "2024-03-06 12:40:00"),
        // Evening commute back out.
        trip("B32006", "A32000", "2024-03-06 17:25:00", "2024-03-06 17:41:00"),
        trip("B32006", "C32019", "2024-03-06 18:02:00", "2024-03-06 18:20:00"),
        // References a station that was removed from the docks file.
        trip("GHOST", "A32000", "2024-03-06 18:30:00", "2024-03-06 18:44:00"),
    ];
    Model::new(stations, trips)
}

#[test]
fn scrub_and_drag() {
    let mut camera = Camera::new(downtown_model().gps_bounds, 1280.0, 720.0);
    let mut controller = Controller::new(downtown_model(), &camera);
    let b = StationId::new("B32006");

    // Full day: B sees 3 departures (incl. the self-loop) and 4 arrivals.
    let full_day = controller.counts()[&b];
    assert_eq!(7, full_day.total);
    assert_eq!(ANY_TIME_LABEL, controller.time_label());
    assert_eq!(&b, controller.busiest(1)[0].0);

    // B is the busiest full-day station, so it gets the top of the
    // unfiltered range.
    let b_full_radius = controller.marks().get(&b).unwrap().radius;
    assert_eq!(25.0, b_full_radius);
    let b_center = controller.marks().get(&b).unwrap().center;

    // Scrub to 8:30am. The three morning trips qualify; nothing else does.
    controller.on_slider_input(510);
    assert_eq!("8:30 AM", controller.time_label());
    let morning = controller.counts()[&b];
    assert_eq!((0, 3), (morning.departures, morning.arrivals));
    // Same mark, new radius, same position.
    let mark = controller.marks().get(&b).unwrap();
    assert_ne!(b_full_radius, mark.radius);
    assert_eq!(b_center, mark.center);
    assert_eq!("3 trips (0 departures, 3 arrivals)", mark.tooltip);

    // Drag the map: every mark moves, no radius changes.
    let morning_radius = mark.radius;
    camera.pan(200.0, 80.0);
    controller.on_viewport_change(ViewportChange::Pan, &camera);
    camera.zoom(2.0);
    controller.on_viewport_change(ViewportChange::Zoom, &camera);
    controller.on_viewport_change(ViewportChange::MoveEnd, &camera);
    let mark = controller.marks().get(&b).unwrap();
    assert_ne!(b_center, mark.center);
    assert_eq!(morning_radius, mark.radius);

    // Clear the filter: full-day radii come back exactly, and the marks are
    // still the ones bound at startup, in their dragged positions.
    controller.on_slider_input(NO_FILTER);
    assert_eq!(ANY_TIME_LABEL, controller.time_label());
    let mark = controller.marks().get(&b).unwrap();
    assert_eq!(b_full_radius, mark.radius);
    assert_ne!(b_center, mark.center);
    assert_eq!(3, controller.marks().len());

    // The ghost trip only ever contributed its matched endpoint: A's two
    // full-day arrivals are the evening commute and the ghost ride in.
    let a = StationId::new("A32000");
    assert_eq!(2, controller.counts()[&a].arrivals);
    assert_eq!(2, controller.counts()[&a].departures);
}
