//! Configuración de variables de entorno
//!
//! Este módulo carga la configuración de la API de flota desde el entorno
//! (o desde `.env`, vía `dotenvy`).

use std::time::Duration;

use url::Url;

use super::credentials::ApiToken;
use crate::utils::errors::{config_error, RouteResult};

pub const ROUTES_URL_VAR: &str = "FLEET_API_ROUTES_URL";
pub const TOKEN_VAR: &str = "FLEET_API_TOKEN";
pub const TIMEOUT_VAR: &str = "FLEET_API_TIMEOUT_SECS";

pub const DEFAULT_ROUTES_URL: &str = "https://api.samsara.com/v1/fleet/routes";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuración de la API de flota
#[derive(Debug, Clone)]
pub struct FleetApiConfig {
    pub routes_url: Url,
    pub api_token: Option<ApiToken>,
    pub timeout: Option<Duration>,
}

impl FleetApiConfig {
    pub fn new(routes_url: &str) -> RouteResult<Self> {
        Ok(Self {
            routes_url: parse_url(routes_url)?,
            api_token: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }

    pub fn with_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cargar desde el entorno. El token es obligatorio.
    pub fn from_env() -> RouteResult<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectada
    pub fn from_lookup<F>(lookup: F) -> RouteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let routes_url = lookup(ROUTES_URL_VAR).unwrap_or_else(|| DEFAULT_ROUTES_URL.to_string());

        let token = lookup(TOKEN_VAR).ok_or_else(|| config_error(format!("{} must be set", TOKEN_VAR)))?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| config_error(format!("{} must be a valid number", TIMEOUT_VAR)))?;
                // 0 desactiva el timeout
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Ok(Self::new(&routes_url)?
            .with_token(ApiToken::new(token)?)
            .with_timeout(timeout))
    }
}

fn parse_url(raw: &str) -> RouteResult<Url> {
    let url = Url::parse(raw).map_err(|e| config_error(format!("{} is not a valid url: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(config_error(format!("unsupported url scheme: {}", other))),
    }
}
