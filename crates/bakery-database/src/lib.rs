//! # bakery-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the Dulce Horno notification workflow.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
