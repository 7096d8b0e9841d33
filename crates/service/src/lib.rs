//! Service layer providing the paginated list / insert operations shared by
//! every marketplace resource.
//! - Separates query logic from HTTP handling.
//! - Reuses entity definitions and the `Resource` trait from the `models` crate.

pub mod errors;
pub mod pagination;
pub mod resources;
#[cfg(test)]
pub mod test_support;
