pub mod frequency;
pub mod repository;
pub mod types;
