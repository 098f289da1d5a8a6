//! Domain-driven design sample built around an in-process domain event
//! dispatcher.
//!
//! - [`events`]: the dispatcher, plus the `Event` / `EventHandler` contracts
//! - [`domain`]: customers, products and orders, their events and handlers
//! - [`infrastructure`]: sqlx repositories mapping entities to rows
//! - [`config`], [`metrics`]: ambient configuration and Prometheus metrics

pub mod config;
pub mod domain;
pub mod events;
pub mod infrastructure;
pub mod metrics;

pub use metrics::DispatchMetrics;
