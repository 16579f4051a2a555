pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod store;
pub mod usecase;
