use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use transitnet_core::model::Network;
use transitnet_core::proto::encode_network;

use super::{AppError, GtfsApp};
use crate::feed::{discover_feed_paths, FeedSet};
use crate::network::build_network;

/// discovers and loads every source, builds the network and writes it.
pub fn run(app: &GtfsApp) -> Result<(), AppError> {
    let conf = app.build_config()?;
    let paths = collect_feed_paths(&app.directories);
    if paths.is_empty() {
        log::warn!("no gtfs sources found, writing an empty network");
    }
    for path in paths.iter() {
        log::info!("found gtfs source {}", path.display());
    }

    let feeds = FeedSet::load(&paths, app.parallelism)?;
    let network = build_network(&feeds, &conf).map_err(AppError::BuildError)?;
    write_network(&network, &app.output)?;
    log::info!("wrote network to {}", app.output.display());
    Ok(())
}

/// discovered sources of every root, in root order. relative roots are read
/// from the working directory so that source names are never empty.
pub fn collect_feed_paths(roots: &[PathBuf]) -> Vec<PathBuf> {
    roots
        .iter()
        .filter(|root| !root.as_os_str().is_empty())
        .flat_map(|root| {
            let absolute = if root.is_absolute() {
                root.clone()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(root))
                    .unwrap_or_else(|_| root.clone())
            };
            discover_feed_paths(&absolute)
        })
        .collect()
}

/// encodes `network` and writes it to `path`. the file is only created once
/// encoding has finished and is removed again if writing fails.
pub fn write_network(network: &Network, path: &Path) -> Result<(), AppError> {
    let bytes = encode_network(network);
    let to_output_error = |source: std::io::Error| AppError::OutputError {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(to_output_error)?;
    let written = file.write_all(&bytes).and_then(|_| file.sync_all());
    if let Err(e) = written {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(to_output_error(e));
    }
    Ok(())
}
