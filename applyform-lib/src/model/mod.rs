//! Form data model

mod field;
mod position;
mod record;
mod skill;

pub use field::*;
pub use position::*;
pub use record::*;
pub use skill::*;
