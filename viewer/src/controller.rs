use std::collections::BTreeMap;

use model::{
    aggregate_traffic, max_total, trips_near, Model, RadiusScale, StationId, Time,
    TrafficCounts,
};

use crate::{Projection, StationMarks};

/// The slider's "no filter" sentinel.
pub const NO_FILTER: i64 = -1;

/// What the time label shows while no filter is set.
pub const ANY_TIME_LABEL: &str = "(any time)";

/// Why the viewport changed. Every kind means exactly the same thing to us:
/// all screen positions are stale. There's no payload on purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportChange {
    Pan,
    Zoom,
    Resize,
    MoveEnd,
}

/// Owns the time filter and wires the two update paths together. Slider
/// input re-runs filter, aggregate, scale, and rebind against the trip set
/// loaded at startup; viewport changes only reposition. The full-day
/// aggregation happens once, both to seed the marks and to fix the radius
/// scale's domain ceiling for the rest of the session.
pub struct Controller {
    model: Model,
    filter: Option<Time>,
    /// The busiest full-day total, fixed at startup. The scale domain
    /// doesn't shrink when a filter narrows the counts being plotted.
    max_traffic: usize,
    counts: BTreeMap<StationId, TrafficCounts>,
    marks: StationMarks,
}

impl Controller {
    pub fn new(model: Model, projection: &dyn Projection) -> Controller {
        let counts = aggregate_traffic(&model.stations, &model.trips);
        let max_traffic = max_total(&counts);
        let scale = RadiusScale::new(max_traffic, false);

        let mut marks = StationMarks::new();
        marks.bind_initial(&model.stations, &counts, &scale);
        marks.reposition(projection);

        info!(
            "Bound {} marks; busiest station sees {} trips over the day",
            marks.len(),
            max_traffic
        );
        Controller {
            model,
            filter: None,
            max_traffic,
            counts,
            marks,
        }
    }

    /// Slider input. -1 clears the filter; anything else is a minute-of-day,
    /// clamped into [0, 1439]. Circles resize; nothing moves.
    pub fn on_slider_input(&mut self, raw: i64) {
        self.filter = if raw == NO_FILTER {
            None
        } else {
            Some(Time::minutes_since_midnight(raw.clamp(0, 1439) as u16))
        };
        debug!("Time filter now {}", self.time_label());

        let trips = trips_near(&self.model.trips, self.filter);
        self.counts = aggregate_traffic(&self.model.stations, trips);
        let scale = RadiusScale::new(self.max_traffic, self.filter.is_some());
        self.marks
            .rebind_radius(&self.model.stations, &self.counts, &scale);
    }

    /// Viewport notification from the map engine. Positions are recomputed;
    /// radii are deliberately left alone.
    pub fn on_viewport_change(&mut self, kind: ViewportChange, projection: &dyn Projection) {
        debug!("{:?}: repositioning {} marks", kind, self.marks.len());
        self.marks.reposition(projection);
    }

    /// The text for the time-of-day label next to the slider.
    pub fn time_label(&self) -> String {
        match self.filter {
            Some(time) => time.ampm_tostring(),
            None => ANY_TIME_LABEL.to_string(),
        }
    }

    pub fn filter(&self) -> Option<Time> {
        self.filter
    }

    pub fn marks(&self) -> &StationMarks {
        &self.marks
    }

    /// The counts from the latest pass, filtered or not.
    pub fn counts(&self) -> &BTreeMap<StationId, TrafficCounts> {
        &self.counts
    }

    /// The busiest stations of the latest pass, ranked by total.
    pub fn busiest(&self, n: usize) -> Vec<(&StationId, TrafficCounts)> {
        let mut ranked: Vec<_> = self.counts.iter().map(|(id, c)| (id, *c)).collect();
        ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use model::{LonLat, Station, Trip};

    use crate::ScreenPt;

    use super::*;

    struct ShiftProjection {
        dx: f64,
    }

    impl Projection for ShiftProjection {
        fn project(&self, pt: LonLat) -> ScreenPt {
            ScreenPt::new(pt.longitude + self.dx, pt.latitude)
        }
    }

    fn trip(start: &str, end: &str, started_at: &str, ended_at: &str) -> Trip {
        let parse = |s| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
        };
        Trip {
            start_station: StationId::new(start),
            end_station: StationId::new(end),
            started_at: parse(started_at),
            ended_at: parse(ended_at),
        }
    }

    fn test_model() -> Model {
        let stations = vec![
            Station {
                id: StationId::new("A"),
                pos: LonLat::new(-71.1, 42.3),
            },
            Station {
                id: StationId::new("B"),
                pos: LonLat::new(-71.0, 42.4),
            },
        ];
        let trips = vec![
            // Morning: two A->B rides.
            trip("A", "B", "2024-03-06 08:05:00", "2024-03-06 08:20:00"),
            trip("A", "B", "2024-03-06 08:40:00", "2024-03-06 08:55:00"),
            // Evening: one B->A ride.
            trip("B", "A", "2024-03-06 20:10:00", "2024-03-06 20:30:00"),
        ];
        Model::new(stations, trips)
    }

    #[test]
    fn startup_fixes_the_scale_domain() {
        let projection = ShiftProjection { dx: 0.0 };
        let controller = Controller::new(test_model(), &projection);

        // Full day: A sees 2 departures + 1 arrival, B the reverse.
        assert_eq!(3, controller.counts()[&StationId::new("A")].total);
        assert_eq!(ANY_TIME_LABEL, controller.time_label());
        let ranked = controller.busiest(2);
        assert_eq!(2, ranked.len());
        assert_eq!(3, ranked[0].1.total);
    }

    #[test]
    fn slider_resizes_but_never_moves() {
        let projection = ShiftProjection { dx: 10.0 };
        let mut controller = Controller::new(test_model(), &projection);

        let a = StationId::new("A");
        let before = controller.marks().get(&a).unwrap();
        let (center_before, radius_before) = (before.center, before.radius);

        // Scrub to 9:00: only the two morning trips remain.
        controller.on_slider_input(540);
        assert_eq!("9:00 AM", controller.time_label());
        assert_eq!(Some(Time::from_hm(9, 0)), controller.filter());
        let counts = &controller.counts()[&a];
        assert_eq!((2, 0), (counts.departures, counts.arrivals));

        let after = controller.marks().get(&a).unwrap();
        assert_eq!(center_before, after.center);
        assert_ne!(radius_before, after.radius);
        // The filtered preset has a nonzero floor, so even an idle station
        // keeps a visible circle.
        controller.on_slider_input(180);
        assert_eq!(0, controller.counts()[&a].total);
        assert_eq!(3.0, controller.marks().get(&a).unwrap().radius);
    }

    #[test]
    fn sentinel_restores_the_full_day() {
        let projection = ShiftProjection { dx: 0.0 };
        let mut controller = Controller::new(test_model(), &projection);
        let a = StationId::new("A");
        let radius_before = controller.marks().get(&a).unwrap().radius;

        controller.on_slider_input(540);
        controller.on_slider_input(NO_FILTER);

        assert_eq!(None, controller.filter());
        assert_eq!(ANY_TIME_LABEL, controller.time_label());
        assert_eq!(radius_before, controller.marks().get(&a).unwrap().radius);
    }

    #[test]
    fn viewport_moves_but_never_resizes() {
        let projection = ShiftProjection { dx: 0.0 };
        let mut controller = Controller::new(test_model(), &projection);
        let a = StationId::new("A");
        let before = controller.marks().get(&a).unwrap();
        let (center_before, radius_before) = (before.center, before.radius);

        for kind in [
            ViewportChange::Pan,
            ViewportChange::Zoom,
            ViewportChange::Resize,
            ViewportChange::MoveEnd,
        ] {
            controller.on_viewport_change(kind, &ShiftProjection { dx: 25.0 });
        }

        let after = controller.marks().get(&a).unwrap();
        assert_ne!(center_before, after.center);
        assert_eq!(ScreenPt::new(-71.1 + 25.0, 42.3), after.center);
        assert_eq!(radius_before, after.radius);
    }

    #[test]
    fn raw_slider_values_clamp() {
        let projection = ShiftProjection { dx: 0.0 };
        let mut controller = Controller::new(test_model(), &projection);

        controller.on_slider_input(5000);
        assert_eq!(Some(Time::END_OF_DAY), controller.filter());
        controller.on_slider_input(-7);
        assert_eq!(Some(Time::START_OF_DAY), controller.filter());
    }
}
