//! The reactive half of bikewatch: one circle per station, sized by traffic
//! and placed by whatever map engine hosts us. Two independent triggers keep
//! the scene in sync -- scrubbing the time slider resizes circles, moving
//! the viewport repositions them -- and neither ever does the other's work.

#[macro_use]
extern crate log;

mod camera;
mod controller;
mod marks;

pub use camera::Camera;
pub use controller::{Controller, ViewportChange, ANY_TIME_LABEL, NO_FILTER};
pub use marks::{Mark, MarkStyle, Projection, ScreenPt, StationMarks, MARK_STYLE};
