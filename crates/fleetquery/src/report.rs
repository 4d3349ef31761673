//! Output rendering for `fleetq`.
//!
//! Every function returns the text to print, so the binary only decides
//! where it goes.

use serde_json::{json, Value};

use crate::aircraft::Aircraft;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::fleet::{FleetService, LoadRequirements};

/// Message printed when a selection comes back empty.
pub const NO_MATCH: &str = "No aircraft meets the requirements";

/// JSON form of an aircraft, including its derived range.
#[must_use]
pub fn aircraft_json(aircraft: &Aircraft) -> Value {
    json!({
        "name": aircraft.name(),
        "seating_capacity": aircraft.seating_capacity(),
        "checked_bag_capacity": aircraft.checked_bag_capacity(),
        "max_fuel_capacity_kg": aircraft.max_fuel_capacity_kg(),
        "fuel_burn_rate_kg_per_km": aircraft.fuel_burn_rate_kg_per_km(),
        "max_range_km": aircraft.max_range_km(),
    })
}

/// Fixed-width table of aircraft with seats, bags, and range.
#[must_use]
pub fn aircraft_table(aircraft: &[&Aircraft]) -> String {
    let mut lines = vec![
        format!(
            "{:<24} {:>6} {:>6} {:>10}",
            "Aircraft", "Seats", "Bags", "Range (km)"
        ),
        "-".repeat(49),
    ];
    lines.extend(aircraft.iter().map(|a| {
        format!(
            "{:<24} {:>6} {:>6} {:>10.1}",
            a.name(),
            a.seating_capacity(),
            a.checked_bag_capacity(),
            a.max_range_km()
        )
    }));
    lines.join("\n")
}

/// JSON document describing a selection.
///
/// `qualifying` is only present when `explain` is set.
#[must_use]
pub fn selection_json(fleet: &FleetService, requirements: LoadRequirements, explain: bool) -> Value {
    let mut output = json!({
        "requirements": {
            "min_seats": requirements.min_seats,
            "min_checked_bags": requirements.min_checked_bags,
            "min_range_km": requirements.min_range_km,
        },
        "selected": fleet.aircraft_for(&requirements).map(aircraft_json),
    });
    if explain {
        output["qualifying"] = fleet.qualifying(requirements).map(aircraft_json).collect();
    }
    output
}

/// Render the result of a selection in the requested format.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn selection(
    fleet: &FleetService,
    requirements: LoadRequirements,
    explain: bool,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&selection_json(
            fleet,
            requirements,
            explain,
        ))?);
    }

    let mut sections = vec![match fleet.aircraft_for(&requirements) {
        Some(aircraft) if format == OutputFormat::Table => aircraft_table(&[aircraft]),
        Some(aircraft) => aircraft.to_string(),
        None => NO_MATCH.to_string(),
    }];

    if explain {
        let qualifying: Vec<&Aircraft> = fleet.qualifying(requirements).collect();
        if !qualifying.is_empty() {
            sections.push(format!(
                "Qualifying aircraft ({}):\n{}",
                qualifying.len(),
                aircraft_table(&qualifying)
            ));
        }
    }
    Ok(sections.join("\n\n"))
}

/// Render the fleet's maximum capacities.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn capacity(fleet: &FleetService, json: bool) -> Result<String> {
    let capacity = fleet.capacity();
    if json {
        return Ok(serde_json::to_string_pretty(&capacity)?);
    }
    Ok([
        "Fleet capacity".to_string(),
        "--------------".to_string(),
        format!("Aircraft:      {}", fleet.len()),
        format!("Max seats:     {}", capacity.max_seating_capacity),
        format!("Max bags:      {}", capacity.max_checked_bag_capacity),
    ]
    .join("\n"))
}

/// Render the fleet listing in the requested format.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn fleet_listing(fleet: &FleetService, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => {
            let entries: Vec<Value> = fleet.aircraft().iter().map(aircraft_json).collect();
            serde_json::to_string_pretty(&entries)?
        }
        OutputFormat::Table => {
            let aircraft: Vec<&Aircraft> = fleet.aircraft().iter().collect();
            aircraft_table(&aircraft)
        }
        OutputFormat::Plain => fleet
            .aircraft()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Render the active configuration.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn config_summary(config: &Config, json: bool) -> Result<String> {
    if json {
        let output = json!({
            "fleet": {
                "path": config.fleet.path.as_ref().map(|p| p.original().display().to_string()),
                "use_default": config.fleet.use_default,
            }
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    let fleet_file = match &config.fleet.path {
        Some(path) => path.original().display().to_string(),
        None => "(none)".to_string(),
    };
    Ok([
        "Current Configuration".to_string(),
        "=====================".to_string(),
        String::new(),
        "[Fleet]".to_string(),
        format!("  Fleet file:         {fleet_file}"),
        format!("  Use built-in fleet: {}", config.fleet_path().is_none()),
    ]
    .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> FleetService {
        FleetService::with_default_fleet()
    }

    #[test]
    fn test_selection_plain() {
        let out = selection(
            &fleet(),
            LoadRequirements::new(18, 36, 3000.0),
            false,
            OutputFormat::Plain,
        )
        .unwrap();
        assert_eq!(out, "Beechcraft 1900D");
    }

    #[test]
    fn test_selection_plain_no_match() {
        let out = selection(
            &fleet(),
            LoadRequirements::new(40, 0, 0.0),
            true,
            OutputFormat::Plain,
        )
        .unwrap();
        assert_eq!(out, NO_MATCH);
    }

    #[test]
    fn test_selection_table() {
        let out = selection(
            &fleet(),
            LoadRequirements::new(6, 12, 700.0),
            false,
            OutputFormat::Table,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Aircraft"));
        assert!(lines[2].starts_with("Cessna Citation M2"));
        assert!(lines[2].ends_with("800.0"));
    }

    #[test]
    fn test_selection_explain_lists_qualifying() {
        let out = selection(
            &fleet(),
            LoadRequirements::new(18, 36, 2000.0),
            true,
            OutputFormat::Plain,
        )
        .unwrap();
        let (selected, rest) = out.split_once("\n\n").unwrap();
        assert_eq!(selected, "Gulfstream G200");
        assert!(rest.starts_with("Qualifying aircraft (3):"));
        assert!(rest.contains("Beechcraft 1900D"));
        assert!(rest.contains("Bombardier CRJ900"));
        assert!(!rest.contains("Embraer Brasilia"));
    }

    #[test]
    fn test_selection_json() {
        let value = selection_json(&fleet(), LoadRequirements::new(18, 36, 3000.0), false);
        assert_eq!(value["selected"]["name"], "Beechcraft 1900D");
        assert_eq!(value["selected"]["max_range_km"], 3800.0);
        assert_eq!(value["requirements"]["min_seats"], 18);
        assert!(value.get("qualifying").is_none());
    }

    #[test]
    fn test_selection_json_no_match_explained() {
        let value = selection_json(&fleet(), LoadRequirements::new(40, 0, 0.0), true);
        assert!(value["selected"].is_null());
        assert_eq!(value["qualifying"], json!([]));
    }

    #[test]
    fn test_selection_json_explain_in_fleet_order() {
        let value = selection_json(&fleet(), LoadRequirements::new(18, 36, 2000.0), true);
        let names: Vec<&str> = value["qualifying"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Gulfstream G200", "Beechcraft 1900D", "Bombardier CRJ900"]
        );
    }

    #[test]
    fn test_selection_json_format_parses() {
        let out = selection(
            &fleet(),
            LoadRequirements::new(6, 12, 700.0),
            false,
            OutputFormat::Json,
        )
        .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["selected"]["name"], "Cessna Citation M2");
    }

    #[test]
    fn test_capacity_plain() {
        let out = capacity(&fleet(), false).unwrap();
        assert!(out.contains("Aircraft:      5"));
        assert!(out.contains("Max seats:     36"));
        assert!(out.contains("Max bags:      72"));
    }

    #[test]
    fn test_capacity_json_empty_fleet() {
        let out = capacity(&FleetService::new(Vec::new()), true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["max_seating_capacity"], 0);
        assert_eq!(value["max_checked_bag_capacity"], 0);
    }

    #[test]
    fn test_fleet_listing_plain_in_order() {
        let out = fleet_listing(&fleet(), OutputFormat::Plain).unwrap();
        let names: Vec<&str> = out.lines().collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "Cessna Citation M2");
        assert_eq!(names[4], "Bombardier CRJ900");
    }

    #[test]
    fn test_fleet_listing_json() {
        let out = fleet_listing(&fleet(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(5));
        assert_eq!(value[1]["name"], "Gulfstream G200");
    }

    #[test]
    fn test_config_summary_default() {
        let out = config_summary(&Config::default(), false).unwrap();
        assert!(out.contains("Fleet file:         (none)"));
        assert!(out.contains("Use built-in fleet: true"));

        let value: Value =
            serde_json::from_str(&config_summary(&Config::default(), true).unwrap()).unwrap();
        assert!(value["fleet"]["path"].is_null());
        assert_eq!(value["fleet"]["use_default"], false);
    }
}
