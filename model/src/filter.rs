use crate::{Time, Trip};

/// How many minutes a trip's start or end may fall from the reference minute
/// and still count. Fixed; the source system never varies it.
pub const TIME_WINDOW: u16 = 60;

/// Narrows the trip log to a time-of-day window around `filter`. `None`
/// means no filter: every trip, original order, no copies. The bound is
/// inclusive, and purely time-of-day -- a trip at 23:50 is nowhere near a
/// reference of 00:10.
pub fn trips_near(trips: &[Trip], filter: Option<Time>) -> Vec<&Trip> {
    match filter {
        None => trips.iter().collect(),
        Some(reference) => trips
            .iter()
            .filter(|trip| {
                trip.start_minute().minutes_apart(reference) <= TIME_WINDOW
                    || trip.end_minute().minutes_apart(reference) <= TIME_WINDOW
            })
            .collect(),
    }
}
