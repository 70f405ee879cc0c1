//! DB-backed integration tests.
//!
//! Drives the real router via `tower::ServiceExt::oneshot` against the
//! database configured by `config/test.toml` (BAKERY env overrides
//! apply as usual).

mod helpers;

mod approval_test;
mod health_test;
mod notification_test;
