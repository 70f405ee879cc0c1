//! Notification workflow services.

pub mod approval;
pub mod composer;
pub mod resolver;
pub mod service;

pub use approval::{ApprovalService, ApprovedRequestHook};
pub use composer::{CambioPropuesto, RequestComposer};
pub use resolver::DirectoryAddressResolver;
pub use service::NotificationService;
