#[macro_use]
extern crate log;

use structopt::StructOpt;

use model::Model;
use viewer::{Camera, Controller, ViewportChange};

#[derive(StructOpt)]
#[structopt(name = "bikewatch")]
struct Flags {
    /// Path to the station document (JSON list of id/lon/lat records)
    #[structopt(long, default_value = "data/stations.json")]
    stations: String,
    /// Path to the trip table (CSV with start/end station ids and timestamps)
    #[structopt(long, default_value = "data/trips.csv")]
    trips: String,
    /// Minute-of-day values to scrub through, -1 meaning "no filter"
    #[structopt(long, use_delimiter = true, default_value = "-1,510,1020")]
    scrub: Vec<i64>,
    /// How many stations to list per scrub step
    #[structopt(long, default_value = "5")]
    top: usize,
}

fn main() {
    let flags = Flags::from_args();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A load failure means nothing initializes: no marks, no listeners, no
    // retries.
    let model = match Model::load(&flags.stations, &flags.trips) {
        Ok(model) => model,
        Err(err) => {
            error!("Not starting: {:?}", err);
            std::process::exit(1);
        }
    };

    let mut camera = Camera::new(model.gps_bounds.clone(), 1280.0, 720.0);
    let mut controller = Controller::new(model, &camera);

    // Scripted stand-in for a user scrubbing the slider and dragging the
    // map around.
    for raw in flags.scrub {
        controller.on_slider_input(raw);
        info!("Showing {}", controller.time_label());
        for (id, counts) in controller.busiest(flags.top) {
            info!("  {}: {}", id, counts.describe());
        }

        camera.pan(40.0, -25.0);
        controller.on_viewport_change(ViewportChange::Pan, &camera);
        camera.zoom(1.5);
        controller.on_viewport_change(ViewportChange::Zoom, &camera);
        controller.on_viewport_change(ViewportChange::MoveEnd, &camera);
    }
}
