//! Modelo de Route
//!
//! Datos de entrada de una ruta tal como los entrega el llamador.
//! Se aceptan tanto los nombres snake_case como los camelCase de la API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::errors::{validation_error, RouteResult};
use crate::utils::validation::{validate_not_empty, validate_stop_coordinates};

/// Parada de una ruta (entrada)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_stop_coordinates", skip_on_field_errors = false))]
pub struct Stop {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Solo se usa en la primera parada
    #[serde(default, alias = "scheduledDepartureTime")]
    pub scheduled_departure_time: Option<String>,
    /// Se usa en todas las paradas excepto la primera
    #[serde(default, alias = "scheduledArrivalTime")]
    pub scheduled_arrival_time: Option<String>,
}

impl Stop {
    pub fn new(name: impl Into<String>, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            notes: String::new(),
            address: address.into(),
            latitude,
            longitude,
            scheduled_departure_time: None,
            scheduled_arrival_time: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn departing_at(mut self, time: impl Into<String>) -> Self {
        self.scheduled_departure_time = Some(time.into());
        self
    }

    pub fn arriving_at(mut self, time: impl Into<String>) -> Self {
        self.scheduled_arrival_time = Some(time.into());
        self
    }
}

/// Request para crear una nueva ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RouteRequest {
    #[serde(alias = "routeName")]
    #[validate(custom = "validate_not_empty")]
    pub route_name: String,

    #[serde(alias = "driverID", alias = "driverId")]
    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,

    #[serde(alias = "routeNotes")]
    pub route_notes: String,

    #[validate(length(min = 1))]
    #[validate]
    pub stops: Vec<Stop>,
}

impl RouteRequest {
    pub fn new(route_name: &str, driver_id: &str, route_notes: &str, stops: Vec<Stop>) -> Self {
        Self {
            route_name: route_name.to_string(),
            driver_id: driver_id.to_string(),
            route_notes: route_notes.to_string(),
            stops,
        }
    }

    /// Construir desde JSON sin tipar.
    ///
    /// Un campo con tipo incorrecto (nombre numérico, `stops` que no es lista,
    /// coordenada en texto...) se reporta como error de validación.
    pub fn from_json(value: serde_json::Value) -> RouteResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| validation_error("request", "route request must be a JSON object"))?;

        check_string(object, &["route_name", "routeName"], "route_name", "routeName must be a non-empty string")?;
        check_string(object, &["driver_id", "driverID", "driverId"], "driver_id", "driverID must be a non-empty string")?;
        check_string(object, &["route_notes", "routeNotes"], "route_notes", "routeNotes must be a string")?;

        match object.get("stops") {
            Some(stops @ serde_json::Value::Array(_)) => {
                if serde_json::from_value::<Vec<Stop>>(stops.clone()).is_err() {
                    return Err(validation_error(
                        "stops",
                        "each stop must have a valid name, address, latitude, and longitude",
                    ));
                }
            }
            _ => return Err(validation_error("stops", "stops must be an array")),
        }

        // Lo que queda: campos duplicados (alias y nombre a la vez) u otra forma inválida
        serde_json::from_value(value)
            .map_err(|_| validation_error("request", "route request has an invalid shape"))
    }
}

fn check_string(
    object: &serde_json::Map<String, serde_json::Value>,
    keys: &[&str],
    field: &'static str,
    message: &'static str,
) -> RouteResult<()> {
    match keys.iter().find_map(|k| object.get(*k)) {
        Some(serde_json::Value::String(_)) => Ok(()),
        _ => Err(validation_error(field, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_camel_case() {
        let request = RouteRequest::from_json(json!({
            "routeName": "Morning run",
            "driverID": "driver-42",
            "routeNotes": "",
            "stops": [{
                "name": "Depot",
                "address": "1 Main St",
                "latitude": 45.0,
                "longitude": -75.0,
                "scheduled_departure_time": "2024-01-15T08:00:00Z"
            }]
        }))
        .unwrap();

        assert_eq!(request.route_name, "Morning run");
        assert_eq!(request.driver_id, "driver-42");
        assert_eq!(request.stops[0].notes, "");
        assert_eq!(
            request.stops[0].scheduled_departure_time.as_deref(),
            Some("2024-01-15T08:00:00Z")
        );
    }

    #[test]
    fn test_from_json_non_string_fields() {
        let base = json!({
            "route_name": "Morning run",
            "driver_id": "driver-42",
            "route_notes": "",
            "stops": []
        });

        for (field, bad) in [
            ("route_name", json!(12)),
            ("driver_id", json!(null)),
            ("route_notes", json!(["a"])),
            ("stops", json!({"name": "x"})),
        ] {
            let mut value = base.clone();
            value[field] = bad;
            let err = RouteRequest::from_json(value).unwrap_err();
            let errors = err.validation_errors().unwrap().field_errors();
            assert!(errors.contains_key(field), "expected error on {field}");
        }
    }

    #[test]
    fn test_from_json_non_numeric_coordinate() {
        let err = RouteRequest::from_json(json!({
            "route_name": "Morning run",
            "driver_id": "driver-42",
            "route_notes": "",
            "stops": [{ "name": "Depot", "address": "1 Main St", "latitude": "north", "longitude": 1.0 }]
        }))
        .unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_json_missing_stop_name() {
        let err = RouteRequest::from_json(json!({
            "route_name": "Morning run",
            "driver_id": "driver-42",
            "route_notes": "",
            "stops": [{ "address": "1 Main St", "latitude": 1.0, "longitude": 1.0 }]
        }))
        .unwrap_err();

        assert!(err.validation_errors().unwrap().field_errors().contains_key("stops"));
    }

    #[test]
    fn test_from_json_duplicate_alias_is_request_error() {
        let err = RouteRequest::from_json(json!({
            "routeName": "Morning run",
            "route_name": "Morning run",
            "driver_id": "driver-42",
            "route_notes": "",
            "stops": []
        }))
        .unwrap_err();

        let errors = err.validation_errors().unwrap().field_errors();
        assert!(errors.contains_key("request"));
        assert!(!errors.contains_key("stops"));
    }
}
