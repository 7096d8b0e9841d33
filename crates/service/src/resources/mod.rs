//! Generic persistence for the marketplace resources.
//!
//! Every record type goes through the same [`ResourceRepository`]; the
//! per-table differences (input shape, sort column, label) come from
//! [`models::Resource`] and [`models::ListedResource`].

pub mod repository;

pub use repository::ResourceRepository;
