//! HTTP handlers for the student API.

pub mod students;
pub use students::*;
