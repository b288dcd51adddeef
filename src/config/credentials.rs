//! Credenciales de la API de flota
//!
//! El token nunca vive en el código: llega por configuración o se lee del
//! entorno en el momento del envío.

use std::fmt;

use crate::utils::errors::{config_error, RouteResult};

/// Token bearer. Su `Debug` no muestra el secreto.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> RouteResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(config_error("API token is empty"));
        }
        Ok(Self(token))
    }

    /// Valor del header `Authorization`
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Origen del token bearer
pub trait TokenSource: Send + Sync {
    fn token(&self) -> RouteResult<ApiToken>;
}

/// Token fijo entregado al construir el servicio
#[derive(Debug, Clone)]
pub struct StaticToken(ApiToken);

impl StaticToken {
    pub fn new(token: ApiToken) -> Self {
        Self(token)
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> RouteResult<ApiToken> {
        Ok(self.0.clone())
    }
}

/// Token leído de una variable de entorno (o `.env`) en cada envío
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(super::environment::TOKEN_VAR)
    }
}

impl TokenSource for EnvToken {
    fn token(&self) -> RouteResult<ApiToken> {
        let value = dotenvy::var(&self.var)
            .map_err(|_| config_error(format!("{} must be set", self.var)))?;
        ApiToken::new(value)
    }
}
