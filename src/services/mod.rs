//! Services module
//!
//! Este módulo contiene la lógica de negocio: validar una ruta y enviarla
//! a la API de flota.

pub mod route_submission_service;

pub use route_submission_service::*;
