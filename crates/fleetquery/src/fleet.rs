//! Fleet query service.
//!
//! A [`FleetService`] owns a fixed, ordered collection of aircraft and
//! answers read-only capacity and selection queries against it. The fleet is
//! never mutated after construction.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::aircraft::Aircraft;

/// Minimum passenger, baggage, and range requirements for a trip.
///
/// Negative minimums are met by every aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRequirements {
    /// Minimum number of passenger seats.
    pub min_seats: i64,
    /// Minimum number of checked bags.
    pub min_checked_bags: i64,
    /// Minimum range in kilometers.
    pub min_range_km: f64,
}

impl LoadRequirements {
    /// Create a new set of load requirements.
    #[must_use]
    pub fn new(min_seats: i64, min_checked_bags: i64, min_range_km: f64) -> Self {
        Self {
            min_seats,
            min_checked_bags,
            min_range_km,
        }
    }

    /// Check whether an aircraft satisfies every requirement.
    ///
    /// A NaN range requirement is never met.
    #[must_use]
    pub fn is_met_by(&self, aircraft: &Aircraft) -> bool {
        i64::from(aircraft.seating_capacity()) >= self.min_seats
            && i64::from(aircraft.checked_bag_capacity()) >= self.min_checked_bags
            && aircraft.max_range_km() >= self.min_range_km
    }
}

/// Fleet-wide maximum capacities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetCapacity {
    /// Greatest seating capacity of any aircraft.
    pub max_seating_capacity: u32,
    /// Greatest checked bag capacity of any aircraft.
    pub max_checked_bag_capacity: u32,
}

/// Read-only query service over a fixed fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetService {
    aircraft: Vec<Aircraft>,
}

impl FleetService {
    /// Create a service over the given aircraft.
    ///
    /// Fleet order is preserved and decides ties in [`Self::aircraft_for`].
    #[must_use]
    pub fn new(aircraft: impl IntoIterator<Item = Aircraft>) -> Self {
        let aircraft: Vec<Aircraft> = aircraft.into_iter().collect();
        if aircraft.is_empty() {
            warn!("Fleet service created with an empty fleet");
        } else {
            debug!("Fleet service created with {} aircraft", aircraft.len());
        }
        Self { aircraft }
    }

    /// Create a service over the built-in five-aircraft fleet.
    #[must_use]
    pub fn with_default_fleet() -> Self {
        Self::new(default_fleet())
    }

    /// All aircraft in fleet order.
    #[must_use]
    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    /// Number of aircraft in the fleet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    /// Check if the fleet has no aircraft.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Find the smallest aircraft that meets all the given minimums.
    ///
    /// "Smallest" means fewest seats; among equally small aircraft the one
    /// that comes first in the fleet wins. Returns `None` if no aircraft
    /// qualifies.
    #[must_use]
    pub fn aircraft_for_load(
        &self,
        min_seats: i64,
        min_checked_bags: i64,
        min_range_km: f64,
    ) -> Option<&Aircraft> {
        self.aircraft_for(&LoadRequirements::new(
            min_seats,
            min_checked_bags,
            min_range_km,
        ))
    }

    /// Find the smallest aircraft that meets `requirements`.
    ///
    /// See [`Self::aircraft_for_load`].
    #[must_use]
    pub fn aircraft_for(&self, requirements: &LoadRequirements) -> Option<&Aircraft> {
        // min_by_key keeps the first of equal minimums.
        let selected = self
            .qualifying(*requirements)
            .min_by_key(|aircraft| aircraft.seating_capacity());

        match selected {
            Some(aircraft) => debug!("Selected {} for {:?}", aircraft, requirements),
            None => debug!("No aircraft meets {:?}", requirements),
        }
        selected
    }

    /// Every aircraft that meets `requirements`, in fleet order.
    pub fn qualifying(
        &self,
        requirements: LoadRequirements,
    ) -> impl Iterator<Item = &Aircraft> + '_ {
        self.aircraft.iter().filter(move |aircraft| {
            let met = requirements.is_met_by(aircraft);
            if !met {
                trace!("{} does not meet {:?}", aircraft, requirements);
            }
            met
        })
    }

    /// The greatest seating capacity in the fleet, or 0 if it is empty.
    #[must_use]
    pub fn maximum_seating_capacity(&self) -> u32 {
        self.aircraft
            .iter()
            .map(Aircraft::seating_capacity)
            .max()
            .unwrap_or(0)
    }

    /// The greatest checked bag capacity in the fleet, or 0 if it is empty.
    #[must_use]
    pub fn maximum_checked_bag_capacity(&self) -> u32 {
        self.aircraft
            .iter()
            .map(Aircraft::checked_bag_capacity)
            .max()
            .unwrap_or(0)
    }

    /// Both maximum capacities at once.
    #[must_use]
    pub fn capacity(&self) -> FleetCapacity {
        FleetCapacity {
            max_seating_capacity: self.maximum_seating_capacity(),
            max_checked_bag_capacity: self.maximum_checked_bag_capacity(),
        }
    }
}

impl Default for FleetService {
    fn default() -> Self {
        Self::with_default_fleet()
    }
}

/// Name, seats, bags, fuel capacity (kg), burn rate (kg/km).
const DEFAULT_FLEET: [(&str, u32, u32, f64, f64); 5] = [
    ("Cessna Citation M2", 6, 12, 400.0, 0.5),
    ("Gulfstream G200", 18, 36, 2000.0, 0.8),
    ("Embraer Brasilia", 14, 28, 2400.0, 0.65),
    ("Beechcraft 1900D", 18, 36, 3800.0, 1.0),
    ("Bombardier CRJ900", 36, 72, 8800.0, 3.47),
];

/// The built-in fleet, in its canonical order.
///
/// # Panics
///
/// Panics if a built-in record fails validation, which is a bug in
/// `DEFAULT_FLEET`.
#[must_use]
pub fn default_fleet() -> Vec<Aircraft> {
    DEFAULT_FLEET
        .iter()
        .map(|&(name, seats, bags, fuel, burn)| {
            Aircraft::new(name, seats, bags, fuel, burn)
                .unwrap_or_else(|err| panic!("built-in fleet record is invalid: {err}"))
        })
        .collect()
}
