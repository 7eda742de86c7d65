//! Error types

mod form;
mod parse;

pub use form::*;
pub use parse::*;
