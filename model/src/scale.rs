use crate::TrafficCounts;

/// Radius range with no time filter active.
pub const RADIUS_RANGE_UNFILTERED: (f64, f64) = (0.0, 25.0);
/// Radius range while filtering. Wider, so the smaller and more variable
/// counts inside a two-hour window keep their contrast: the quietest
/// stations stay visible at radius 3, the busiest still stand out.
pub const RADIUS_RANGE_FILTERED: (f64, f64) = (3.0, 50.0);

/// Maps a traffic count to a circle radius. Square-root, so circle AREA
/// roughly tracks the count instead of the radius doing so.
pub struct RadiusScale {
    max_traffic: usize,
    range: (f64, f64),
}

impl RadiusScale {
    /// `max_traffic` is the full-day ceiling. It stays fixed while a filter
    /// is active, even though the counts actually plotted come from a
    /// smaller subset.
    pub fn new(max_traffic: usize, filtered: bool) -> RadiusScale {
        RadiusScale {
            max_traffic,
            range: if filtered {
                RADIUS_RANGE_FILTERED
            } else {
                RADIUS_RANGE_UNFILTERED
            },
        }
    }

    pub fn radius(&self, total: usize) -> f64 {
        let (low, high) = self.range;
        if self.max_traffic == 0 {
            return low;
        }
        let fraction = ((total as f64) / (self.max_traffic as f64)).min(1.0);
        low + (high - low) * fraction.sqrt()
    }
}

/// Which way a station's activity leans, for coloring its circle: mostly
/// arrivals, mostly departures, or balanced. The departure share is
/// quantized into three equal buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowClass {
    MoreArrivals,
    Balanced,
    MoreDepartures,
}

impl FlowClass {
    pub fn classify(counts: &TrafficCounts) -> FlowClass {
        if counts.total == 0 {
            return FlowClass::Balanced;
        }
        let share = (counts.departures as f64) / (counts.total as f64);
        if share < 1.0 / 3.0 {
            FlowClass::MoreArrivals
        } else if share < 2.0 / 3.0 {
            FlowClass::Balanced
        } else {
            FlowClass::MoreDepartures
        }
    }
}
