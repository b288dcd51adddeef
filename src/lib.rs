//! Fleet Route Submitter
//!
//! Valida una ruta (nombre, conductor, notas y paradas), la envía a la API de
//! flota con un único POST autenticado y devuelve el ID de la ruta creada.
//!
//! ```no_run
//! use fleet_route_submitter::{FleetApiConfig, RouteSubmissionService, Stop};
//!
//! # async fn run() -> fleet_route_submitter::RouteResult<()> {
//! let service = RouteSubmissionService::from_config(FleetApiConfig::from_env()?)?;
//! let stops = vec![
//!     Stop::new("Depot", "1 Main St", 45.0, -75.0).departing_at("2024-01-15T08:00:00Z"),
//!     Stop::new("Client", "22 Oak Ave", 45.1, -75.1).arriving_at("2024-01-15T09:00:00Z"),
//! ];
//! let route_id = service.submit("Morning run", "driver-42", "", &stops).await?;
//! println!("created {route_id}");
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod utils;

pub use clients::{BoxBody, HttpClient, ReqwestHttpClient, ResponseBody};
pub use config::{ApiToken, EnvToken, FleetApiConfig, StaticToken, TokenSource};
pub use dto::{RouteId, RoutePayload, RoutePayloadStop};
pub use models::{RouteRequest, Stop};
pub use services::RouteSubmissionService;
pub use utils::errors::{RouteError, RouteResult};
