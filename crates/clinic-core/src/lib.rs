//! Stateless domain logic for the clinic-management backend.
//!
//! Every operation in this crate is a pure function over request-scoped
//! values: no I/O, no shared mutable state, no HTTP types. The HTTP surface
//! that exposes these operations lives in `clinic-server`.

pub mod access;
pub mod consultation;
pub mod records;
pub mod usage;

pub use access::derive_allowed_sections;
pub use consultation::{ConsultationRecord, DateField};
pub use records::{format_record_line, format_record_lines};
pub use usage::{UsageCounts, UsageTally, tally_usage};
