use std::collections::BTreeMap;

use crate::{Counter, Station, StationId, Trip};

/// One station's activity over some set of trips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrafficCounts {
    pub arrivals: usize,
    pub departures: usize,
    /// Always arrivals + departures.
    pub total: usize,
}

impl TrafficCounts {
    /// The tooltip string shown on a station's circle.
    pub fn describe(&self) -> String {
        format!(
            "{} trips ({} departures, {} arrivals)",
            self.total, self.departures, self.arrivals
        )
    }
}

/// Rolls a trip log up into per-station counts. Every station in `stations`
/// gets an entry, zeroed if it saw no activity. Trips referencing a station
/// id that isn't in `stations` count toward nothing; that's expected input,
/// not an error. Each call returns a complete fresh table, so it's safe to
/// re-run with different trip subsets against the same station list.
pub fn aggregate_traffic<'a, I: IntoIterator<Item = &'a Trip>>(
    stations: &[Station],
    trips: I,
) -> BTreeMap<StationId, TrafficCounts> {
    let mut departures = Counter::new();
    let mut arrivals = Counter::new();
    for trip in trips {
        departures.inc(trip.start_station.clone());
        arrivals.inc(trip.end_station.clone());
    }

    stations
        .iter()
        .map(|station| {
            let arrivals = arrivals.get(&station.id);
            let departures = departures.get(&station.id);
            (
                station.id.clone(),
                TrafficCounts {
                    arrivals,
                    departures,
                    total: arrivals + departures,
                },
            )
        })
        .collect()
}

/// The busiest station's total. Computed once from the full-day aggregation
/// to fix the radius scale's domain ceiling.
pub fn max_total(counts: &BTreeMap<StationId, TrafficCounts>) -> usize {
    counts.values().map(|c| c.total).max().unwrap_or(0)
}
