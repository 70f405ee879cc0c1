//! # bakery-service
//!
//! Business logic service layer for Dulce Horno. Each service orchestrates
//! the notification repository, user directory, and push dispatcher to
//! implement the workflow use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod notification;

pub use context::RequestContext;
pub use notification::{
    ApprovalService, ApprovedRequestHook, CambioPropuesto, DirectoryAddressResolver,
    NotificationService, RequestComposer,
};
