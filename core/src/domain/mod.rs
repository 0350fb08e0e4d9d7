//! Domain layer
//!
//! All entities here are transient request-scoped values; nothing is
//! persisted and nothing has identity beyond its value.

pub mod value_objects;
