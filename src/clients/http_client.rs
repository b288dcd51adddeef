//! Cliente HTTP para la API de flota
//!
//! `HttpClient` es la única capacidad de red que necesita el servicio:
//! enviar una petición y devolver estado y headers. El cuerpo se lee aparte,
//! solo cuando el llamador lo pide. La implementación de producción usa
//! `reqwest`; los tests usan dobles en memoria.

use std::time::Duration;

use async_trait::async_trait;
use http::{Request, Response};

use crate::utils::errors::{RouteError, RouteResult};

/// Cuerpo de respuesta todavía sin leer
#[async_trait]
pub trait ResponseBody: Send {
    async fn read(self: Box<Self>) -> RouteResult<Vec<u8>>;
}

pub type BoxBody = Box<dyn ResponseBody>;

/// Cuerpo ya disponible en memoria
#[async_trait]
impl ResponseBody for Vec<u8> {
    async fn read(self: Box<Self>) -> RouteResult<Vec<u8>> {
        Ok(*self)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Enviar una petición y devolver la respuesta sin leer su cuerpo.
    ///
    /// Los fallos de transporte se devuelven como `RouteError::Network`;
    /// un estado HTTP de error NO es un fallo aquí.
    async fn send(&self, request: Request<Vec<u8>>) -> RouteResult<Response<BoxBody>>;
}

/// Cliente HTTP basado en `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Option<Duration>) -> RouteResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent("FleetRouteSubmitter/1.0");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| RouteError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Cuerpo de una respuesta `reqwest`, leído bajo demanda
struct ReqwestBody(reqwest::Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read(self: Box<Self>) -> RouteResult<Vec<u8>> {
        let bytes = self.0.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: Request<Vec<u8>>) -> RouteResult<Response<BoxBody>> {
        let request = reqwest::Request::try_from(request)
            .map_err(|e| RouteError::Network(format!("Invalid request: {}", e)))?;

        let response = self.client.execute(request).await?;

        let mut builder = Response::builder().status(response.status());
        if let Some(h) = builder.headers_mut() {
            *h = response.headers().clone();
        }

        builder
            .body(Box::new(ReqwestBody(response)) as BoxBody)
            .map_err(|e| RouteError::Network(format!("Invalid response: {}", e)))
    }
}
