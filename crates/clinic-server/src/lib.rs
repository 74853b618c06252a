//! HTTP surface for the clinic-management backend.
//!
//! All domain logic lives in `clinic-core`; this crate only wires it to an
//! axum router with the middleware stack the frontend expects.

pub mod server;
