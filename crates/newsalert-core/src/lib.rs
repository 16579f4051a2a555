//! Ambient plumbing shared by newsalert services.
//!
//! Holds the tracing setup and the env-backed configuration trait so every
//! binary in the workspace starts up the same way.

pub mod config;
pub mod tracing;
