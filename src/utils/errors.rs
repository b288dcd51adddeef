//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error que puede devolver el envío de rutas.
//! Todos se propagan al llamador; ninguno se reintenta automáticamente.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Errores principales del envío de rutas
#[derive(Error, Debug)]
pub enum RouteError {
    /// Alguna precondición de entrada no se cumple. Nunca hay tráfico de red.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// La API respondió con un estado que no es de éxito
    #[error("Failed to post route: {status} {reason}")]
    RemoteService { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    /// El cuerpo de la respuesta no es JSON o no trae `data.id`
    #[error("Response format error: {0}")]
    ResponseFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RouteError {
    /// Código corto del tipo de error, útil para logs y métricas del llamador
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::Validation(_) => "VALIDATION_ERROR",
            RouteError::RemoteService { .. } => "REMOTE_SERVICE_ERROR",
            RouteError::Network(_) => "NETWORK_ERROR",
            RouteError::ResponseFormat(_) => "RESPONSE_FORMAT_ERROR",
            RouteError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Errores de validación por campo, si los hay
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RouteError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(e: reqwest::Error) -> Self {
        RouteError::Network(e.to_string())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type RouteResult<T> = Result<T, RouteError>;

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, message: &'static str) -> RouteError {
    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);
    error.message = Some(message.into());

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    RouteError::Validation(errors)
}

/// Función helper para errores de configuración
pub fn config_error(message: impl Into<String>) -> RouteError {
    RouteError::Config(message.into())
}
