//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de la API de flota y el origen
//! de las credenciales.

pub mod credentials;
pub mod environment;

pub use credentials::*;
pub use environment::*;
