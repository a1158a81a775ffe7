//! Core domain types and logic.

pub mod error;
pub mod validation;
pub mod value;
