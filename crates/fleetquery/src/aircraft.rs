//! Aircraft records for fleetquery.
//!
//! An [`Aircraft`] describes one airframe's passenger, baggage, and fuel
//! characteristics. Records are validated when they are built, so every
//! value in a fleet has a finite, positive maximum range.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An immutable description of one airframe.
///
/// The maximum range is derived from the fuel figures rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AircraftRecord", into = "AircraftRecord")]
pub struct Aircraft {
    name: String,
    seating_capacity: u32,
    checked_bag_capacity: u32,
    max_fuel_capacity_kg: f64,
    fuel_burn_rate_kg_per_km: f64,
}

/// Unvalidated wire form of an [`Aircraft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AircraftRecord {
    name: String,
    seating_capacity: u32,
    checked_bag_capacity: u32,
    max_fuel_capacity_kg: f64,
    fuel_burn_rate_kg_per_km: f64,
}

impl Aircraft {
    /// Create a new aircraft record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAircraft`] if the name is blank, the seating
    /// capacity is zero, or either fuel figure is not a finite positive
    /// number. A zero burn rate is rejected here so that range computation
    /// never divides by zero.
    pub fn new(
        name: impl Into<String>,
        seating_capacity: u32,
        checked_bag_capacity: u32,
        max_fuel_capacity_kg: f64,
        fuel_burn_rate_kg_per_km: f64,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::invalid_aircraft(name, "name must not be blank"));
        }
        if seating_capacity == 0 {
            return Err(Error::invalid_aircraft(
                name,
                "seating capacity must be at least 1",
            ));
        }
        if !is_positive_finite(max_fuel_capacity_kg) {
            return Err(Error::invalid_aircraft(
                name,
                format!("max fuel capacity must be a positive number, got {max_fuel_capacity_kg}"),
            ));
        }
        if !is_positive_finite(fuel_burn_rate_kg_per_km) {
            return Err(Error::invalid_aircraft(
                name,
                format!("fuel burn rate must be a positive number, got {fuel_burn_rate_kg_per_km}"),
            ));
        }

        Ok(Self {
            name,
            seating_capacity,
            checked_bag_capacity,
            max_fuel_capacity_kg,
            fuel_burn_rate_kg_per_km,
        })
    }

    /// The aircraft's name. Names are not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of passenger seats.
    #[must_use]
    pub fn seating_capacity(&self) -> u32 {
        self.seating_capacity
    }

    /// Number of checked bags the aircraft can carry.
    #[must_use]
    pub fn checked_bag_capacity(&self) -> u32 {
        self.checked_bag_capacity
    }

    /// Maximum fuel load in kilograms.
    #[must_use]
    pub fn max_fuel_capacity_kg(&self) -> f64 {
        self.max_fuel_capacity_kg
    }

    /// Fuel consumption in kilograms per kilometer.
    #[must_use]
    pub fn fuel_burn_rate_kg_per_km(&self) -> f64 {
        self.fuel_burn_rate_kg_per_km
    }

    /// Maximum range in kilometers on a full tank.
    #[must_use]
    pub fn max_range_km(&self) -> f64 {
        self.max_fuel_capacity_kg / self.fuel_burn_rate_kg_per_km
    }
}

impl std::fmt::Display for Aircraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<AircraftRecord> for Aircraft {
    type Error = Error;

    fn try_from(record: AircraftRecord) -> Result<Self> {
        Self::new(
            record.name,
            record.seating_capacity,
            record.checked_bag_capacity,
            record.max_fuel_capacity_kg,
            record.fuel_burn_rate_kg_per_km,
        )
    }
}

impl From<Aircraft> for AircraftRecord {
    fn from(aircraft: Aircraft) -> Self {
        Self {
            name: aircraft.name,
            seating_capacity: aircraft.seating_capacity,
            checked_bag_capacity: aircraft.checked_bag_capacity,
            max_fuel_capacity_kg: aircraft.max_fuel_capacity_kg,
            fuel_burn_rate_kg_per_km: aircraft.fuel_burn_rate_kg_per_km,
        }
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
