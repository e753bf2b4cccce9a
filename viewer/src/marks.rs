use std::collections::{BTreeMap, HashMap, HashSet};

use model::{FlowClass, LonLat, RadiusScale, Station, StationId, TrafficCounts};

/// A position in screen space, in pixels from the top-left corner of the
/// window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPt {
    pub x: f64,
    pub y: f64,
}

impl ScreenPt {
    pub fn new(x: f64, y: f64) -> ScreenPt {
        ScreenPt { x, y }
    }
}

/// Maps a geographic position to screen space. The map engine owns the
/// viewport transform, so a result is only valid until the next
/// `ViewportChange` -- don't cache these.
pub trait Projection {
    fn project(&self, pt: LonLat) -> ScreenPt;
}

/// The paint shared by every station circle, fixed when a mark is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub fill_opacity: f64,
}

pub const MARK_STYLE: MarkStyle = MarkStyle {
    fill: "steelblue",
    stroke: "white",
    fill_opacity: 0.6,
};

/// One station's circle. The screen center and radius are both derived --
/// always recomputable from the current counts table and the current
/// viewport -- the mark just caches them between updates.
pub struct Mark {
    pub pos: LonLat,
    pub center: ScreenPt,
    pub radius: f64,
    pub tooltip: String,
    pub flow: FlowClass,
    pub style: MarkStyle,
}

impl Mark {
    fn new(station: &Station, counts: TrafficCounts, radius: f64) -> Mark {
        Mark {
            pos: station.pos,
            center: ScreenPt::new(0.0, 0.0),
            radius,
            tooltip: counts.describe(),
            flow: FlowClass::classify(&counts),
            style: MARK_STYLE,
        }
    }
}

/// The keyed collection of station circles. The invariant that matters: the
/// mark for station X stays the SAME mark across every recomputation, so
/// resizes update it in place rather than destroying and restyling it.
/// Radius updates and position updates arrive from independent triggers and
/// never touch each other's fields.
pub struct StationMarks {
    marks: HashMap<StationId, Mark>,
}

impl StationMarks {
    pub fn new() -> StationMarks {
        StationMarks {
            marks: HashMap::new(),
        }
    }

    /// Creates one mark per station. Positions start at the origin; the
    /// caller follows up with `reposition` once a projection exists.
    pub fn bind_initial(
        &mut self,
        stations: &[Station],
        counts: &BTreeMap<StationId, TrafficCounts>,
        scale: &RadiusScale,
    ) {
        self.marks.clear();
        self.rebind_radius(stations, counts, scale);
    }

    /// Re-keys the marks against a fresh counts table. Marks for stations
    /// still present update radius, tooltip, and flow class in place; marks
    /// for vanished stations are dropped; stations seen for the first time
    /// get new marks. In practice the key set never churns, since filtering
    /// narrows trips, not stations.
    pub fn rebind_radius(
        &mut self,
        stations: &[Station],
        counts: &BTreeMap<StationId, TrafficCounts>,
        scale: &RadiusScale,
    ) {
        let mut seen = HashSet::with_capacity(stations.len());
        for station in stations {
            let station_counts = counts.get(&station.id).copied().unwrap_or_default();
            let radius = scale.radius(station_counts.total);
            match self.marks.get_mut(&station.id) {
                Some(mark) => {
                    mark.radius = radius;
                    mark.tooltip = station_counts.describe();
                    mark.flow = FlowClass::classify(&station_counts);
                }
                None => {
                    self.marks
                        .insert(station.id.clone(), Mark::new(station, station_counts, radius));
                }
            }
            seen.insert(station.id.clone());
        }

        let before = self.marks.len();
        self.marks.retain(|id, _| seen.contains(id));
        if self.marks.len() != before {
            debug!("Dropped {} stale marks", before - self.marks.len());
        }
    }

    /// Rewrites every mark's screen position from the projection. Radii are
    /// untouched; they only go stale when the counts change, not when the
    /// viewport does.
    pub fn reposition(&mut self, projection: &dyn Projection) {
        for mark in self.marks.values_mut() {
            mark.center = projection.project(mark.pos);
        }
    }

    pub fn get(&self, id: &StationId) -> Option<&Mark> {
        self.marks.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationId, &Mark)> {
        self.marks.iter()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl Default for StationMarks {
    fn default() -> StationMarks {
        StationMarks::new()
    }
}
