use serde::{Deserialize, Serialize};

use transitnet_core::model::WeekdayMask;

use crate::network::frequency::ServiceWindow;
use crate::network::{MissingStopLocationPolicy, NetworkError};

/// parameters of a network build. loaded from a `.toml` or `.json` file,
/// any omitted field takes its default.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct NetworkBuildConfig {
    /// stops closer than this many meters are merged into one canonical stop
    pub identity_radius: f64,
    /// stops closer than this many meters are connected by walk edges
    pub walk_radius: f64,
    /// length of every service window in hours
    pub hour_range: u32,
    pub service_windows: Vec<ServiceWindow>,
    /// compose display names for stops and lines
    pub extra_info: bool,
    pub missing_stop_location_policy: MissingStopLocationPolicy,
}

impl Default for NetworkBuildConfig {
    fn default() -> Self {
        Self {
            identity_radius: 100.0,
            walk_radius: 350.0,
            hour_range: 3,
            service_windows: ServiceWindow::defaults(),
            extra_info: false,
            missing_stop_location_policy: MissingStopLocationPolicy::default(),
        }
    }
}

impl NetworkBuildConfig {
    pub fn validate(&self) -> Result<(), NetworkError> {
        let positive = |radius: f64| radius.is_finite() && radius > 0.0;
        if !positive(self.identity_radius) || !positive(self.walk_radius) {
            return Err(NetworkError::InvalidConfiguration(format!(
                "radii must be positive, found identity_radius={} walk_radius={}",
                self.identity_radius, self.walk_radius
            )));
        }
        if self.identity_radius >= self.walk_radius {
            return Err(NetworkError::InvalidConfiguration(format!(
                "identity_radius ({}) must be smaller than walk_radius ({})",
                self.identity_radius, self.walk_radius
            )));
        }
        if self.hour_range == 0 || self.hour_range > ServiceWindow::MAX_START_HOUR {
            return Err(NetworkError::InvalidConfiguration(format!(
                "hour_range must be between 1 and {} hours, found {}",
                ServiceWindow::MAX_START_HOUR,
                self.hour_range
            )));
        }
        for window in self.service_windows.iter() {
            if !WeekdayMask::ALL.contains_all(window.weekdays) {
                return Err(NetworkError::InvalidConfiguration(format!(
                    "service window weekdays {} use bits above Sunday",
                    window.weekdays.bits()
                )));
            }
            if window.start_hour > ServiceWindow::MAX_START_HOUR {
                return Err(NetworkError::InvalidConfiguration(format!(
                    "service window start_hour {} is past hour {}",
                    window.start_hour,
                    ServiceWindow::MAX_START_HOUR
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&String> for NetworkBuildConfig {
    type Error = NetworkError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: NetworkBuildConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NetworkError::InvalidConfiguration(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                NetworkError::InvalidConfiguration(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                NetworkError::InvalidConfiguration(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                NetworkError::InvalidConfiguration(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(NetworkError::InvalidConfiguration(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkBuildConfig;
    use crate::network::frequency::ServiceWindow;
    use crate::network::MissingStopLocationPolicy;
    use transitnet_core::model::WeekdayMask;

    #[test]
    fn test_defaults_are_valid() {
        let conf = NetworkBuildConfig::default();
        assert!(conf.validate().is_ok());
        assert_eq!(conf.service_windows.len(), 2);
        assert_eq!(conf.service_windows[1].weekdays.bits(), 48);
        assert_eq!(conf.service_windows[1].start_hour, 21);
    }

    #[test]
    fn test_identity_radius_must_be_smaller() {
        let conf = NetworkBuildConfig {
            identity_radius: 350.0,
            ..Default::default()
        };
        assert!(conf.validate().is_err());
        let conf = NetworkBuildConfig {
            walk_radius: -1.0,
            ..Default::default()
        };
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_service_windows_are_checked() {
        let conf = NetworkBuildConfig {
            service_windows: vec![ServiceWindow::new(WeekdayMask::MONDAY, u32::MAX)],
            ..Default::default()
        };
        assert!(conf.validate().is_err());

        let conf = NetworkBuildConfig {
            service_windows: vec![ServiceWindow::new(WeekdayMask::SUNDAY, 47)],
            ..Default::default()
        };
        assert!(conf.validate().is_ok());

        let conf = NetworkBuildConfig {
            hour_range: u32::MAX,
            ..Default::default()
        };
        assert!(conf.validate().is_err());

        // a deserialized mask keeps every bit it was given
        let conf: NetworkBuildConfig = toml::from_str(
            r#"
            [[service_windows]]
            weekdays = 129
            start_hour = 6
        "#,
        )
        .expect("should decode");
        assert_eq!(conf.service_windows[0].weekdays.bits(), 129);
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
            walk_radius = 500.0
            missing_stop_location_policy = "fail"

            [[service_windows]]
            weekdays = 96
            start_hour = 9
        "#;
        let conf: NetworkBuildConfig = toml::from_str(toml_str).expect("should decode");
        assert_eq!(conf.walk_radius, 500.0);
        assert_eq!(conf.identity_radius, 100.0);
        assert_eq!(conf.hour_range, 3);
        assert_eq!(conf.missing_stop_location_policy, MissingStopLocationPolicy::Fail);
        assert_eq!(conf.service_windows.len(), 1);
        assert_eq!(conf.service_windows[0].weekdays.bits(), 96);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = NetworkBuildConfig::try_from(&String::from("build.yaml"));
        assert!(result.is_err());
    }
}
