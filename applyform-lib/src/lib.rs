//! Job application form library
//!
//! The form record, its position-dependent validation rules, and the session
//! that keeps the two in sync on every edit.

pub mod error;
pub mod model;
pub mod validation;

mod session;
mod submission;

pub use session::*;
pub use submission::*;
