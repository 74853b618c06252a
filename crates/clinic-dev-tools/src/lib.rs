//! Development tools for the clinic frontend tree.
//!
//! Currently a single tool: the in-place HTML/JS comment stripper behind the
//! `strip-comments` binary.

pub mod strip;
pub mod walk;
