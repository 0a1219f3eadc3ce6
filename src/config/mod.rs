//! Property configuration loading and management.
//!
//! This module provides functionality to load a hostel's setup from YAML
//! files: property metadata plus rooms, beds, booking kinds, and default
//! nightly rates.
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/demo_hostel").unwrap();
//! println!("Loaded property: {}", loader.property().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BedConfig, PropertyConfig, PropertyMetadata, RoomConfig, RoomsConfig};
