//! Utilidades de validación
//!
//! Validadores custom usados por `#[derive(Validate)]` en los modelos de
//! ruta, y el punto de entrada `validate_route`. Los errores se acumulan en
//! un `ValidationErrors` para que el llamador vea todos los campos inválidos
//! de una vez.

use validator::{Validate, ValidationError};

use crate::models::route::{RouteRequest, Stop};
use crate::utils::errors::RouteResult;

/// Validar que un string no esté vacío (tras recortar espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("must be a non-empty string".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que una coordenada sea un número utilizable (ni NaN ni infinito)
pub fn validate_coordinate(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("numeric");
        error.add_param("coordinate".into(), &name);
        error.message = Some("must be a number".into());
        return Err(error);
    }
    Ok(())
}

/// Validación a nivel de parada: latitud y longitud numéricas
pub fn validate_stop_coordinates(stop: &Stop) -> Result<(), ValidationError> {
    validate_coordinate("latitude", stop.latitude)?;
    validate_coordinate("longitude", stop.longitude)
}

/// Validar todas las precondiciones de una ruta
pub fn validate_route(route: &RouteRequest) -> RouteResult<()> {
    route.validate()?;
    Ok(())
}
