use model::{GpsBounds, LonLat};

use crate::{Projection, ScreenPt};

const MIN_ZOOM: f64 = 0.25;
const MAX_ZOOM: f64 = 16.0;

/// A stand-in for the external map engine's viewport, used by the headless
/// driver and tests. Stations land on a flat plane stretched over the
/// window, then a camera transform applies: screen = world * zoom - cam.
pub struct Camera {
    gps_bounds: GpsBounds,
    pub cam_x: f64,
    pub cam_y: f64,
    pub cam_zoom: f64,
    window_width: f64,
    window_height: f64,
}

impl Camera {
    pub fn new(gps_bounds: GpsBounds, window_width: f64, window_height: f64) -> Camera {
        Camera {
            gps_bounds,
            cam_x: 0.0,
            cam_y: 0.0,
            cam_zoom: 1.0,
            window_width,
            window_height,
        }
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.cam_x += dx;
        self.cam_y += dy;
    }

    pub fn zoom(&mut self, factor: f64) {
        self.cam_zoom = (self.cam_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn resize(&mut self, window_width: f64, window_height: f64) {
        self.window_width = window_width;
        self.window_height = window_height;
    }
}

impl Projection for Camera {
    fn project(&self, pt: LonLat) -> ScreenPt {
        let (x, y) = self.gps_bounds.to_unit(pt);
        ScreenPt::new(
            x * self.window_width * self.cam_zoom - self.cam_x,
            y * self.window_height * self.cam_zoom - self.cam_y,
        )
    }
}
