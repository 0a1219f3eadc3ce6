//! Property configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for loading property
//! setup from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Resource;

use super::types::{PropertyConfig, PropertyMetadata, RoomsConfig};

/// Loads and provides access to a property's configuration.
///
/// The `ConfigLoader` reads YAML files from a property directory and
/// provides lookups for rooms, beds, and default nightly rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/demo_hostel/
/// ├── property.yaml   # Property metadata
/// └── rooms.yaml      # Rooms, beds, kinds and default nightly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo_hostel").unwrap();
///
/// let resource = loader.resource(2, Some(203)).unwrap();
/// println!("Default rate: {}", resource.default_nightly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PropertyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the property directory (e.g., "./config/demo_hostel")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use booking_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/demo_hostel")?;
    /// # Ok::<(), booking_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let property_path = path.join("property.yaml");
        let metadata = Self::load_yaml::<PropertyMetadata>(&property_path)?;

        let rooms_path = path.join("rooms.yaml");
        let rooms_config = Self::load_yaml::<RoomsConfig>(&rooms_path)?;

        let config = PropertyConfig::new(metadata, rooms_config.rooms);
        debug!(
            property = %config.metadata().code,
            rooms = config.rooms().len(),
            capacity = config.capacity(),
            "loaded property configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying property configuration.
    pub fn config(&self) -> &PropertyConfig {
        &self.config
    }

    /// Returns the property metadata.
    pub fn property(&self) -> &PropertyMetadata {
        self.config.metadata()
    }

    /// Resolves a (room id, optional bed id) pair into a bookable resource.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] or [`EngineError::BedNotFound`]
    /// when either id is unknown.
    pub fn resource(&self, room_id: i64, bed_id: Option<i64>) -> EngineResult<Resource> {
        self.config.resource(room_id, bed_id)
    }

    /// Gets the default nightly rate for a room.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] when the room id is unknown.
    pub fn default_rate(&self, room_id: i64) -> EngineResult<Decimal> {
        Ok(self.config.room(room_id)?.default_nightly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/demo_hostel"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.property().code, "casa_tranquila");
        assert_eq!(loader.property().name, "Casa Tranquila Hostel");
        assert_eq!(loader.property().currency, "EUR");
    }

    #[test]
    fn test_default_rate_for_private_room() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.default_rate(1).unwrap(), dec("85.00"));
    }

    #[test]
    fn test_resource_for_dorm_bed() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let resource = loader.resource(2, Some(203)).unwrap();
        assert_eq!(resource.room_id, 2);
        assert_eq!(resource.bed_id, Some(203));
        assert_eq!(resource.default_nightly_rate, dec("28.50"));
    }

    #[test]
    fn test_unknown_room_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.resource(99, None) {
            Err(EngineError::RoomNotFound { room_id }) => assert_eq!(room_id, 99),
            other => panic!("Expected RoomNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("property.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_capacity_counts_private_rooms_and_dorm_beds() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        // 2 private rooms + 6-bed dorm + 4-bed dorm
        assert_eq!(loader.config().capacity(), 12);
    }
}
