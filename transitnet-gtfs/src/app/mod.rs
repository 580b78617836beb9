mod app_error;
mod gtfs_app;
mod run;

pub use app_error::AppError;
pub use gtfs_app::GtfsApp;
pub use run::{collect_feed_paths, run, write_network};
