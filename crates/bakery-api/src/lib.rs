//! # bakery-api
//!
//! HTTP API layer for Dulce Horno built on Axum.
//!
//! Provides the notification endpoints, auth extraction, RBAC guards,
//! request logging, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
