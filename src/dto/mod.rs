//! DTOs
//!
//! Estructuras de datos que viajan por la red hacia y desde la API de flota.

pub mod route_dto;

pub use route_dto::*;
