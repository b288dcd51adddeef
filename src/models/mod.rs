//! Modelos del sistema
//!
//! Este módulo contiene los modelos de entrada que entrega el llamador.

pub mod route;

pub use route::*;
