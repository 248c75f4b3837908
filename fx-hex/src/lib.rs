//! # FX Hex
//!
//! Application service layer and HTTP adapter for the conversion service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (the conversion pipeline and history lookup)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: TransactionStore` and `P: RateProvider`,
//! allowing different store and rate-provider implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ConversionService;
