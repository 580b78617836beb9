use std::path::PathBuf;

use clap::Parser;

use super::AppError;
use crate::network::{MissingStopLocationPolicy, NetworkBuildConfig};

/// builds a travel-time transit network with typical line frequencies from
/// GTFS sources and writes it as a binary protobuf file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GtfsApp {
    /// directories containing GTFS sources (unpacked or .zip), or .zip file paths.
    /// directories are traversed. multiple values are comma separated: /here,/there
    #[arg(short = 'd', long, value_delimiter = ',', required = true)]
    pub directories: Vec<PathBuf>,
    /// output file for the encoded network
    #[arg(short = 'o', long)]
    pub output: PathBuf,
    /// log progress at info level. RUST_LOG takes precedence.
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// add display names to stops and lines
    #[arg(short = 'e', long)]
    pub extra_info: bool,
    /// path to a .toml or .json file with network build parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// how to treat stops without a location, overrides the configuration file
    #[arg(long, value_enum)]
    pub missing_stop_location_policy: Option<MissingStopLocationPolicy>,
    /// number of threads loading GTFS sources, 0 for one per core
    #[arg(long, default_value_t = 0)]
    pub parallelism: usize,
}

impl GtfsApp {
    /// default log filter when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "error"
        }
    }

    /// reads the configuration file if one was given. the extra info and
    /// missing stop location flags override the file.
    pub fn build_config(&self) -> Result<NetworkBuildConfig, AppError> {
        let mut conf = match &self.configuration_file {
            None => NetworkBuildConfig::default(),
            Some(f) => {
                log::info!("reading network build configuration from {f}");
                NetworkBuildConfig::try_from(f).map_err(AppError::ConfigurationError)?
            }
        };
        if self.extra_info {
            conf.extra_info = true;
        }
        if let Some(policy) = self.missing_stop_location_policy {
            conf.missing_stop_location_policy = policy;
        }
        Ok(conf)
    }
}
