use std::fmt;

use serde::Deserialize;

// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

/// The bounding box over every loaded station.
#[derive(Clone, Debug, PartialEq)]
pub struct GpsBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GpsBounds {
    pub fn new() -> GpsBounds {
        GpsBounds {
            min_lon: f64::MAX,
            min_lat: f64::MAX,
            max_lon: f64::MIN,
            max_lat: f64::MIN,
        }
    }

    pub fn update(&mut self, pt: LonLat) {
        self.min_lon = self.min_lon.min(pt.longitude);
        self.max_lon = self.max_lon.max(pt.longitude);
        self.min_lat = self.min_lat.min(pt.latitude);
        self.max_lat = self.max_lat.max(pt.latitude);
    }

    pub fn contains(&self, pt: LonLat) -> bool {
        pt.longitude >= self.min_lon
            && pt.longitude <= self.max_lon
            && pt.latitude >= self.min_lat
            && pt.latitude <= self.max_lat
    }

    /// Places a point on a flat unit square, (0, 0) at the northwest corner.
    /// Plenty for a city-sized area; a real basemap projection belongs to
    /// the map engine.
    pub fn to_unit(&self, pt: LonLat) -> (f64, f64) {
        let width = self.max_lon - self.min_lon;
        let height = self.max_lat - self.min_lat;
        // A single-station bounding box has no extent; park everything in
        // the middle.
        let x = if width == 0.0 {
            0.5
        } else {
            (pt.longitude - self.min_lon) / width
        };
        let y = if height == 0.0 {
            0.5
        } else {
            (self.max_lat - pt.latitude) / height
        };
        (x, y)
    }
}

impl Default for GpsBounds {
    fn default() -> GpsBounds {
        GpsBounds::new()
    }
}
