//! # bakery-push
//!
//! Push-provider boundary for the Dulce Horno backend: the wire message
//! and ticket types, the [`PushProvider`] trait with its Expo-style HTTP
//! client, audience address resolution, and the batching fan-out
//! dispatcher.
//!
//! Delivery is at-most-once best effort: the dispatcher never raises on
//! a delivery failure and never retries, persists, or queues.

pub mod audience;
pub mod dispatcher;
pub mod message;
pub mod provider;
pub mod resolver;
pub mod token;

pub use audience::Audience;
pub use dispatcher::{DeliverySummary, PushDispatcher};
pub use message::{PushMessage, PushTicket, TicketStatus};
pub use provider::{ExpoPushClient, PushProvider};
pub use resolver::AddressResolver;
