//! Core value types shared across the crate.

mod object_id;

pub use object_id::ObjectId;
