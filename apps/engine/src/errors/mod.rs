//! Error handling for the dominoes engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
