//! The data half of bikewatch: station and trip records for one day of a
//! bike-share system, and the pure pipeline that turns them into per-station
//! traffic counts and circle radii. Everything here is synchronous and total;
//! the only concurrency is the two dataset loads at startup.

#[macro_use]
extern crate log;

use std::fmt;

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Deserialize;

mod counter;
mod filter;
mod gps;
mod load;
mod scale;
mod time;
mod traffic;

pub use counter::Counter;
pub use filter::{trips_near, TIME_WINDOW};
pub use gps::{GpsBounds, LonLat};
pub use scale::{
    FlowClass, RadiusScale, RADIUS_RANGE_FILTERED, RADIUS_RANGE_UNFILTERED,
};
pub use time::Time;
pub use traffic::{aggregate_traffic, max_total, TrafficCounts};

/// The short textual code identifying one station, unique across the loaded
/// station set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct StationId(String);

impl StationId {
    pub fn new<S: Into<String>>(id: S) -> StationId {
        StationId(id.into())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dock somewhere in the city. Stations are loaded once at startup and
/// never created or destroyed afterwards; traffic counts live in a separate
/// table keyed by id, recomputed from scratch every pass.
pub struct Station {
    pub id: StationId,
    pub pos: LonLat,
}

/// One ride from the trip log. Only the time-of-day component of the two
/// timestamps ever matters downstream. The station references may point at
/// ids absent from the loaded station set; such trips just count toward
/// nothing.
#[derive(Debug)]
pub struct Trip {
    pub start_station: StationId,
    pub end_station: StationId,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    pub fn start_minute(&self) -> Time {
        Time::of(self.started_at)
    }

    pub fn end_minute(&self) -> Time {
        Time::of(self.ended_at)
    }
}

pub struct Model {
    pub stations: Vec<Station>,
    pub trips: Vec<Trip>,
    pub gps_bounds: GpsBounds,
}

impl Model {
    pub fn new(stations: Vec<Station>, trips: Vec<Trip>) -> Model {
        let mut gps_bounds = GpsBounds::new();
        for station in &stations {
            gps_bounds.update(station.pos);
        }
        Model {
            stations,
            trips,
            gps_bounds,
        }
    }

    /// Loads both datasets, issued concurrently and jointly awaited. If
    /// either fails, the model never exists -- there's no partial state to
    /// render.
    pub fn load(stations_path: &str, trips_path: &str) -> Result<Model> {
        let (stations, trips) = std::thread::scope(|s| {
            let stations = s.spawn(|| load::load_stations(stations_path));
            let trips = s.spawn(|| load::load_trips(trips_path));
            (
                stations.join().expect("station loader panicked"),
                trips.join().expect("trip loader panicked"),
            )
        });
        let model = Model::new(stations?, trips?);
        info!(
            "Loaded {} stations and {} trips",
            model.stations.len(),
            model.trips.len()
        );
        Ok(model)
    }
}
