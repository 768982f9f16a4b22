//! StudentService: validated student lifecycle over the record store.

mod students;
mod validation;
pub use students::StudentService;
pub(crate) use validation::RequestValidator;
