//! Persistence models for the marketplace records.
//!
//! One SeaORM entity per table, plus the JSON input shape each POST endpoint
//! accepts and the [`Resource`] trait that lets the service layer treat all
//! six records uniformly.

pub mod errors;
pub mod db;
pub mod timestamp;
pub mod resource;
pub mod assignment;
pub mod project;
pub mod research_paper;
pub mod video;
pub mod feedback;
pub mod booking;

pub use resource::{ListedResource, Resource};

#[cfg(test)]
mod tests;
