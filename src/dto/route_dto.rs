//! DTOs para la API de rutas de flota
//!
//! Formato de cable que espera `POST /v1/fleet/routes` y la respuesta que
//! devuelve al crear la ruta.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::route::Stop;
use crate::utils::errors::{RouteError, RouteResult};

/// Cuerpo enviado a la API de flota
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub route_name: String,
    pub driver_id: String,
    pub route_notes: String,
    pub stops: Vec<RoutePayloadStop>,
}

/// Parada en formato de cable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePayloadStop {
    pub name: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RoutePayloadStop {
    /// La primera parada lleva la hora de salida; el resto, la de llegada
    pub fn from_stop(index: usize, stop: &Stop) -> Self {
        let scheduled_time = if index == 0 {
            stop.scheduled_departure_time.clone()
        } else {
            stop.scheduled_arrival_time.clone()
        };

        Self {
            name: stop.name.clone(),
            notes: stop.notes.clone(),
            scheduled_time,
            address: stop.address.clone(),
            latitude: stop.latitude,
            longitude: stop.longitude,
        }
    }
}

impl RoutePayload {
    pub fn new(route_name: &str, driver_id: &str, route_notes: &str, stops: &[Stop]) -> Self {
        Self {
            route_name: route_name.to_string(),
            driver_id: driver_id.to_string(),
            route_notes: route_notes.to_string(),
            stops: stops
                .iter()
                .enumerate()
                .map(|(index, stop)| RoutePayloadStop::from_stop(index, stop))
                .collect(),
        }
    }
}

/// Response de la API al crear una ruta. Solo interesa `data.id`.
#[derive(Debug, Deserialize)]
pub struct CreateRouteResponse {
    pub data: Option<CreatedRoute>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRoute {
    pub id: Option<serde_json::Value>,
}

impl CreateRouteResponse {
    pub fn from_slice(body: &[u8]) -> RouteResult<Self> {
        serde_json::from_slice(body)
            .map_err(|e| RouteError::ResponseFormat(format!("Error parsing route response: {}", e)))
    }

    /// Extraer el identificador de la ruta creada
    pub fn route_id(self) -> RouteResult<RouteId> {
        let id = self
            .data
            .and_then(|d| d.id)
            .ok_or_else(|| RouteError::ResponseFormat("response has no data.id".to_string()))?;

        match id {
            serde_json::Value::String(s) if s.is_empty() => {
                Err(RouteError::ResponseFormat("data.id is empty".to_string()))
            }
            serde_json::Value::String(s) => Ok(RouteId(s)),
            serde_json::Value::Number(n) => Ok(RouteId(n.to_string())),
            other => Err(RouteError::ResponseFormat(format!(
                "data.id is not a string or number: {}",
                other
            ))),
        }
    }
}

/// Identificador asignado por la API a la ruta creada
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub String);

impl RouteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RouteId> for String {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new("Depot", "1 Main St", 45.0, -75.0)
                .departing_at("2024-01-15T08:00:00Z")
                .arriving_at("ignored-on-first"),
            Stop::new("Client A", "22 Oak Ave", 45.1, -75.1)
                .with_notes("ring twice")
                .departing_at("ignored-after-first")
                .arriving_at("2024-01-15T09:00:00Z"),
            Stop::new("Client B", "9 Elm Rd", 45.2, -75.2).arriving_at("2024-01-15T10:30:00Z"),
        ]
    }

    #[test]
    fn test_scheduled_time_positional_rule() {
        let payload = RoutePayload::new("Morning run", "driver-42", "fragile", &stops());

        assert_eq!(payload.stops[0].scheduled_time.as_deref(), Some("2024-01-15T08:00:00Z"));
        assert_eq!(payload.stops[1].scheduled_time.as_deref(), Some("2024-01-15T09:00:00Z"));
        assert_eq!(payload.stops[2].scheduled_time.as_deref(), Some("2024-01-15T10:30:00Z"));

        let names: Vec<_> = payload.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Depot", "Client A", "Client B"]);
        assert_eq!(payload.stops[1].notes, "ring twice");
        assert_eq!(payload.stops[2].address, "9 Elm Rd");
        assert_eq!(payload.stops[2].latitude, 45.2);
        assert_eq!(payload.stops[2].longitude, -75.2);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = RoutePayload::new("Morning run", "driver-42", "", &stops()[..1]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "routeName": "Morning run",
                "driverId": "driver-42",
                "routeNotes": "",
                "stops": [{
                    "name": "Depot",
                    "notes": "",
                    "scheduled_time": "2024-01-15T08:00:00Z",
                    "address": "1 Main St",
                    "latitude": 45.0,
                    "longitude": -75.0
                }]
            })
        );
    }

    #[test]
    fn test_missing_scheduled_time_is_omitted() {
        let payload = RoutePayload::new("r", "d", "", &[Stop::new("Depot", "1 Main St", 1.0, 2.0)]);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["stops"][0].get("scheduled_time").is_none());
    }

    #[test]
    fn test_route_id_string_and_number() {
        let id = CreateRouteResponse::from_slice(br#"{"data":{"id":"route-123"}}"#)
            .and_then(CreateRouteResponse::route_id)
            .unwrap();
        assert_eq!(id, "route-123");

        let id = CreateRouteResponse::from_slice(br#"{"data":{"id":98765,"name":"x"}}"#)
            .and_then(CreateRouteResponse::route_id)
            .unwrap();
        assert_eq!(id.as_str(), "98765");
    }

    #[test]
    fn test_route_id_missing_or_malformed() {
        for body in [
            &br#"{"data":{}}"#[..],
            br#"{"ok":true}"#,
            br#"{"data":{"id":null}}"#,
            br#"{"data":{"id":""}}"#,
        ] {
            let err = CreateRouteResponse::from_slice(body)
                .and_then(CreateRouteResponse::route_id)
                .unwrap_err();
            assert_eq!(err.code(), "RESPONSE_FORMAT_ERROR");
        }

        let err = CreateRouteResponse::from_slice(br#"{"data":{"id":""}}"#)
            .and_then(CreateRouteResponse::route_id)
            .unwrap_err();
        assert_eq!(err.to_string(), "Response format error: data.id is empty");

        let err = CreateRouteResponse::from_slice(b"<html>oops</html>").unwrap_err();
        assert_eq!(err.code(), "RESPONSE_FORMAT_ERROR");
    }
}
