//! Servicio de envío de rutas a la API de flota
//!
//! Valida la ruta, la transforma al formato de cable, hace un único POST
//! autenticado y devuelve el ID de la ruta creada. No hay reintentos.

use std::sync::Arc;

use http::{header, Method, Request};
use tracing::{debug, error, info};

use crate::clients::{HttpClient, ReqwestHttpClient};
use crate::config::{FleetApiConfig, StaticToken, TokenSource};
use crate::dto::route_dto::{CreateRouteResponse, RouteId, RoutePayload};
use crate::models::route::{RouteRequest, Stop};
use crate::utils::errors::{config_error, validation_error, RouteError, RouteResult};
use crate::utils::validation::validate_route;

pub struct RouteSubmissionService {
    config: FleetApiConfig,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenSource>,
}

impl RouteSubmissionService {
    pub fn new(config: FleetApiConfig, http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenSource>) -> Self {
        Self { config, http, tokens }
    }

    /// Servicio con cliente `reqwest` y el token de la configuración
    pub fn from_config(config: FleetApiConfig) -> RouteResult<Self> {
        let token = config
            .api_token
            .clone()
            .ok_or_else(|| config_error("API token is not configured"))?;
        let http = ReqwestHttpClient::new(config.timeout)?;

        Ok(Self::new(config, Arc::new(http), Arc::new(StaticToken::new(token))))
    }

    pub fn config(&self) -> &FleetApiConfig {
        &self.config
    }

    /// Validar y enviar una ruta. Devuelve el ID asignado por la API.
    pub async fn submit(
        &self,
        route_name: &str,
        driver_id: &str,
        route_notes: &str,
        stops: &[Stop],
    ) -> RouteResult<RouteId> {
        let request = RouteRequest::new(route_name, driver_id, route_notes, stops.to_vec());
        self.submit_request(&request).await
    }

    pub async fn submit_request(&self, request: &RouteRequest) -> RouteResult<RouteId> {
        match self.try_submit(request).await {
            Ok(route_id) => {
                info!("✅ Route posted successfully: {}", route_id);
                Ok(route_id)
            }
            Err(e) => {
                error!("❌ Failed to post route ({}): {}", e.code(), e);
                Err(e)
            }
        }
    }

    /// Enviar una ruta recibida como JSON sin tipar
    pub async fn submit_json(&self, value: serde_json::Value) -> RouteResult<RouteId> {
        let request = RouteRequest::from_json(value).inspect_err(|e| {
            error!("❌ Failed to post route ({}): {}", e.code(), e);
        })?;
        self.submit_request(&request).await
    }

    /// Construir el cuerpo que se envía a la API, sin validar
    pub fn build_payload(route_name: &str, driver_id: &str, route_notes: &str, stops: &[Stop]) -> RoutePayload {
        RoutePayload::new(route_name, driver_id, route_notes, stops)
    }

    async fn try_submit(&self, route: &RouteRequest) -> RouteResult<RouteId> {
        validate_route(route)?;

        let payload = Self::build_payload(&route.route_name, &route.driver_id, &route.route_notes, &route.stops);
        let body = serde_json::to_vec(&payload)
            .map_err(|_| validation_error("request", "route payload could not be serialized"))?;

        let token = self.tokens.token()?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(self.config.routes_url.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, token.bearer())
            .body(body)
            .map_err(|e| config_error(format!("Invalid route request: {}", e)))?;

        info!(
            "📤 Posting route '{}' for driver {} with {} stops",
            route.route_name,
            route.driver_id,
            payload.stops.len()
        );

        let response = self.http.send(request).await?;
        let status = response.status();

        debug!("📡 Fleet API response status: {}", status);

        // El cuerpo de una respuesta de error no se lee
        if !status.is_success() {
            return Err(RouteError::RemoteService {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            });
        }

        let body = response.into_body().read().await?;
        CreateRouteResponse::from_slice(&body)?.route_id()
    }
}
