//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP abstraction used to talk to the fleet API.

pub mod http_client;

pub use http_client::{BoxBody, HttpClient, ReqwestHttpClient, ResponseBody};
