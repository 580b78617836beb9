//! reads GTFS sources and writes a travel-time network with typical line
//! frequencies as a binary protobuf file.
use clap::Parser;
use transitnet_gtfs::app::{self, GtfsApp};

fn main() {
    let args = GtfsApp::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();
    match app::run(&args) {
        Ok(_) => eprintln!("finished."),
        Err(e) => {
            log::error!("transitnet-gtfs failed: {e}");
            eprintln!("transitnet-gtfs failed: {e}");
            std::process::exit(1);
        }
    }
}
