//! `fleetquery` - Aircraft selection over a fixed fleet
//!
//! This library answers read-only queries against an immutable fleet of
//! aircraft: the smallest aircraft that meets a passenger, baggage, and range
//! load, and the fleet's maximum seating and checked bag capacities.
//!
//! ```
//! use fleetquery::FleetService;
//!
//! let fleet = FleetService::with_default_fleet();
//! let aircraft = fleet.aircraft_for_load(18, 36, 3000.0).unwrap();
//! assert_eq!(aircraft.name(), "Beechcraft 1900D");
//! assert_eq!(fleet.maximum_seating_capacity(), 36);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod aircraft;
pub mod cli;
pub mod config;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod report;

pub use aircraft::Aircraft;
pub use config::Config;
pub use error::{Error, Result};
pub use fleet::{FleetCapacity, FleetService, LoadRequirements};
pub use logging::init_logging;
